use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture directory present")
}

fn cli() -> Command {
    cargo_bin_cmd!("trnav")
}

fn prepare_command() -> Command {
    let fixtures = fixtures_dir();
    let mut cmd = cli();
    cmd.env_remove("TRNAV_LOCATIONS")
        .env_remove("TRNAV_CONNECTIONS")
        .env("RUST_LOG", "error")
        .arg("--locations")
        .arg(fixtures.join("city_coordinates.txt"))
        .arg("--connections")
        .arg(fixtures.join("city_connections.txt"));
    cmd
}

#[test]
fn route_prints_total_distance_and_path() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Edirne", "--to", "Sivas"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Total Distance: 1047.30. Path: edirne -> istanbul -> ankara -> sivas",
        ))
        .stdout(predicate::str::contains("(3 hops; algorithm: dijkstra)"));
}

#[test]
fn a_star_algorithm_is_supported() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "izmir",
        "--to",
        "kayseri",
        "--algorithm",
        "a-star",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Total Distance: 950.41. Path: izmir -> bursa -> ankara -> kayseri",
        ))
        .stdout(predicate::str::contains("algorithm: a-star"));
}

#[test]
fn json_format_outputs_structured_route() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--from", "edirne", "--to", "sivas"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["algorithm"], "dijkstra");
    assert_eq!(value["hops"], 3);
    assert_eq!(value["start"], "edirne");
    assert_eq!(value["goal"], "sivas");
    let steps = value["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 4);
    assert!(steps[0].get("distance").is_none());
    assert_eq!(steps[3]["name"], "sivas");
}

#[test]
fn avoided_location_is_routed_around() {
    let mut cmd = prepare_command();
    cmd.args([
        "route", "--from", "edirne", "--to", "sivas", "--avoid", "Ankara",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("edirne -> istanbul -> bursa"))
        .stdout(predicate::str::contains("ankara").not());
}

#[test]
fn max_leg_that_cannot_be_met_reports_a_hint() {
    let mut cmd = prepare_command();
    cmd.args([
        "route", "--from", "edirne", "--to", "sivas", "--max-leg", "100",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between edirne and sivas. Try increase --max-leg.",
        ));
}

#[test]
fn unknown_location_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Istanbul", "--to", "Ankra"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown location 'ankra'"))
        .stderr(predicate::str::contains("Did you mean 'ankara'?"));
}

#[test]
fn isolated_location_has_no_route() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "istanbul", "--to", "van"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "No route found between istanbul and van. The two locations are not connected.",
    ));
}

#[test]
fn missing_endpoints_are_prompted_for() {
    let mut cmd = prepare_command();
    cmd.arg("route").write_stdin("atlantis\nEdirne\nSIVAS\n");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Enter starting city:"))
        .stderr(predicate::str::contains(
            "City named atlantis not found. Please enter a valid city name.",
        ))
        .stderr(predicate::str::contains("Enter destination city:"))
        .stdout(predicate::str::contains("Enter").not())
        .stdout(predicate::str::contains(
            "Path: edirne -> istanbul -> ankara -> sivas",
        ));
}

#[test]
fn prompted_json_route_keeps_stdout_parseable() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--to", "sivas"])
        .write_stdin("edirne\n");

    let output = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter starting city:"))
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["start"], "edirne");
    assert_eq!(value["goal"], "sivas");
}

#[test]
fn invalid_max_leg_values_are_rejected() {
    for value in ["NaN", "-5", "far"] {
        let mut cmd = prepare_command();
        cmd.args(["route", "--from", "edirne", "--to", "sivas"])
            .arg(format!("--max-leg={value}"));

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"))
            .stderr(predicate::str::contains("--max-leg"));
    }
}

#[test]
fn prompt_fails_when_input_ends() {
    let mut cmd = prepare_command();
    cmd.arg("route").write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no location name entered"));
}

#[test]
fn default_file_names_are_read_from_working_directory() {
    let fixtures = fixtures_dir();
    let temp_dir = tempdir().expect("create temp dir");
    for name in ["city_coordinates.txt", "city_connections.txt"] {
        fs::copy(fixtures.join(name), temp_dir.path().join(name)).expect("copy fixture");
    }

    let mut cmd = cli();
    cmd.env_remove("TRNAV_LOCATIONS")
        .env_remove("TRNAV_CONNECTIONS")
        .env("RUST_LOG", "error")
        .current_dir(temp_dir.path())
        .args(["route", "--from", "istanbul", "--to", "antalya"]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Path: istanbul -> bursa -> izmir -> antalya",
    ));
}

#[test]
fn environment_variables_select_map_files() {
    let fixtures = fixtures_dir();
    let temp_dir = tempdir().expect("create temp dir");

    let mut cmd = cli();
    cmd.env("TRNAV_LOCATIONS", fixtures.join("city_coordinates.txt"))
        .env("TRNAV_CONNECTIONS", fixtures.join("city_connections.txt"))
        .env("RUST_LOG", "error")
        .current_dir(temp_dir.path())
        .args(["route", "--from", "edirne", "--to", "bursa"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Path: edirne -> istanbul -> bursa"));
}

#[test]
fn missing_location_file_is_reported() {
    let temp_dir = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--locations")
        .arg(temp_dir.path().join("absent.txt"))
        .arg("--connections")
        .arg(fixtures_dir().join("city_connections.txt"))
        .args(["route", "--from", "a", "--to", "b"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load locations from"));
}
