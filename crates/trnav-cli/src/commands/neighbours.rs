//! Neighbours command handler: direct connections of one location.

use std::io::Write;

use anyhow::Result;

use crate::commands::route::describe_error;
use crate::commands::{load_map, MapPaths};
use crate::output::{NeighbourReport, OutputFormat};

pub fn handle_neighbours_command<W: Write>(
    out: &mut W,
    paths: &MapPaths,
    format: OutputFormat,
    name: &str,
) -> Result<()> {
    let (_, graph) = load_map(paths)?;
    let key = graph.resolve(name).map_err(describe_error)?;
    let edges = graph.neighbours(&key).cloned().unwrap_or_default();
    format.render_neighbours(out, &NeighbourReport::new(&key, &edges))
}
