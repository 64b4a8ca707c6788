// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod distance;
pub mod neighbours;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use trnav_lib::{load_graph, load_registry, LocationRegistry, WeightedGraph};

/// Input files describing the map.
#[derive(Debug, Clone)]
pub struct MapPaths {
    pub locations: PathBuf,
    pub connections: PathBuf,
}

/// Load the coordinate file, then the connection file resolved against it.
pub fn load_map(paths: &MapPaths) -> Result<(LocationRegistry, WeightedGraph)> {
    let registry = load_locations(&paths.locations)?;
    let graph = load_graph(&paths.connections, &registry).with_context(|| {
        format!(
            "failed to load connections from {}",
            paths.connections.display()
        )
    })?;
    debug!(
        locations = registry.len(),
        edges = graph.edge_count(),
        "map loaded"
    );
    Ok((registry, graph))
}

/// Load only the coordinate file.
pub fn load_locations(path: &Path) -> Result<LocationRegistry> {
    load_registry(path)
        .with_context(|| format!("failed to load locations from {}", path.display()))
}
