use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("trnav");
    cmd.env("RUST_LOG", "error")
        .arg("--locations")
        .arg(fixture("city_coordinates.txt"))
        .arg("--connections")
        .arg(fixture("city_connections.txt"));
    cmd
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("trnav");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("distance"))
        .stdout(predicate::str::contains("neighbours"));
}

#[test]
fn distance_between_locations() {
    let mut cmd = prepare_command();
    cmd.args(["distance", "--from", "Edirne", "--to", "Istanbul"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Distance from edirne to istanbul: 152.32",
        ));
}

#[test]
fn distance_json_output() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "distance", "--from", "edirne", "--to", "van"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["from"], "edirne");
    assert_eq!(value["to"], "van");
    let distance = value["distance"].as_f64().expect("numeric distance");
    let expected = (1680.0_f64.powi(2) + 370.0_f64.powi(2)).sqrt();
    assert!((distance - expected).abs() < 1e-9);
}

#[test]
fn distance_unknown_location_suggests() {
    let mut cmd = prepare_command();
    cmd.args(["distance", "--from", "izmr", "--to", "ankara"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown location 'izmr'. Did you mean 'izmir'?"));
}

#[test]
fn neighbours_sorted_by_distance() {
    let mut cmd = prepare_command();
    cmd.args(["neighbours", "--name", "Istanbul"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Connections from istanbul:"))
        .stdout(predicate::str::is_match(
            r"(?s)- bursa \(104\.40\).*- edirne \(152\.32\).*- ankara",
        )
        .expect("valid regex"));
}

#[test]
fn neighbours_of_isolated_location() {
    let mut cmd = prepare_command();
    cmd.args(["neighbours", "--name", "van"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("van has no direct connections."));
}

#[test]
fn invalid_algorithm_is_rejected() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "a", "--to", "b", "--algorithm", "bfs"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'bfs'"));
}
