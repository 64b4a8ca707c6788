#![allow(dead_code)]

use std::path::PathBuf;

use trnav_lib::{load_graph, load_registry, LocationRegistry, WeightedGraph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_map() -> (LocationRegistry, WeightedGraph) {
    let registry = load_registry(&fixtures_dir().join("city_coordinates.txt"))
        .expect("fixture coordinates load");
    let graph = load_graph(&fixtures_dir().join("city_connections.txt"), &registry)
        .expect("fixture connections load");
    (registry, graph)
}

/// Sum of the registry distances between consecutive names.
pub fn path_length(registry: &LocationRegistry, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| registry.distance(&pair[0], &pair[1]).expect("known names"))
        .sum()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * a.abs().max(b.abs()).max(1.0)
}
