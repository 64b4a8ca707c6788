//! Distance command handler: straight-line distance between two locations.

use std::io::Write;

use anyhow::Result;

use crate::commands::route::describe_error;
use crate::commands::{load_locations, MapPaths};
use crate::output::{DistanceReport, OutputFormat};

pub fn handle_distance_command<W: Write>(
    out: &mut W,
    paths: &MapPaths,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let registry = load_locations(&paths.locations)?;
    let distance = registry.distance(from, to).map_err(describe_error)?;
    let report = DistanceReport {
        from: registry.get(from).map_err(describe_error)?.name().to_string(),
        to: registry.get(to).map_err(describe_error)?.name().to_string(),
        distance,
    };
    format.render_distance(out, &report)
}
