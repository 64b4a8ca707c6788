//! Output formatting for command results.
//!
//! Text output prints the one-line route format followed by a short
//! summary; JSON output serialises the library summary structures unchanged.

use std::collections::HashMap;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use trnav_lib::RouteSummary;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Distance between two named locations.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistanceReport {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Direct connections of a location, nearest first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NeighbourReport {
    pub name: String,
    pub neighbours: Vec<Neighbour>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Neighbour {
    pub name: String,
    pub distance: f64,
}

impl NeighbourReport {
    pub fn new(name: &str, edges: &HashMap<String, f64>) -> Self {
        let mut neighbours: Vec<Neighbour> = edges
            .iter()
            .map(|(name, &distance)| Neighbour {
                name: name.clone(),
                distance,
            })
            .collect();
        neighbours.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.name.cmp(&b.name))
        });
        Self {
            name: name.to_string(),
            neighbours,
        }
    }
}

impl OutputFormat {
    /// Render a route summary.
    pub fn render_route<W: Write>(self, out: &mut W, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => {
                writeln!(out, "{}", summary.render_plain())?;
                writeln!(
                    out,
                    "({} hops; algorithm: {})",
                    summary.hops, summary.algorithm
                )?;
            }
            OutputFormat::Json => write_json(out, summary)?,
        }
        Ok(())
    }

    pub fn render_distance<W: Write>(self, out: &mut W, report: &DistanceReport) -> Result<()> {
        match self {
            OutputFormat::Text => writeln!(
                out,
                "Distance from {} to {}: {:.2}",
                report.from, report.to, report.distance
            )?,
            OutputFormat::Json => write_json(out, report)?,
        }
        Ok(())
    }

    pub fn render_neighbours<W: Write>(self, out: &mut W, report: &NeighbourReport) -> Result<()> {
        match self {
            OutputFormat::Text => {
                if report.neighbours.is_empty() {
                    writeln!(out, "{} has no direct connections.", report.name)?;
                } else {
                    writeln!(out, "Connections from {}:", report.name)?;
                    for neighbour in &report.neighbours {
                        writeln!(out, "- {} ({:.2})", neighbour.name, neighbour.distance)?;
                    }
                }
            }
            OutputFormat::Json => write_json(out, report)?,
        }
        Ok(())
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    writeln!(out, "{json}")?;
    Ok(())
}
