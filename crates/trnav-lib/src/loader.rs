//! Loading location and connection records from text files.
//!
//! Coordinate files hold one `name, x, y` record per line and connection
//! files hold one `name1,name2` record per line. Neither format has a header.
//! Fields are trimmed, blank lines are skipped, and names are normalized when
//! the records reach the registry.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use crate::location::LocationRegistry;

/// One row of a coordinate file.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// One row of a connection file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}

fn field<'r>(record: &'r StringRecord, index: usize, label: &str) -> Result<&'r str> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MalformedRecord {
            line: line_of(record),
            message: format!("missing {label}"),
        }),
    }
}

fn coordinate(record: &StringRecord, index: usize, label: &str) -> Result<f64> {
    let raw = field(record, index, label)?;
    raw.parse::<f64>().map_err(|err| Error::MalformedRecord {
        line: line_of(record),
        message: format!("invalid {label} '{raw}': {err}"),
    })
}

/// Parse `name, x, y` records.
pub fn read_locations<R: Read>(source: R) -> Result<Vec<LocationRecord>> {
    let mut records = Vec::new();
    for row in reader(source).records() {
        let row = row?;
        if row.len() != 3 {
            return Err(Error::MalformedRecord {
                line: line_of(&row),
                message: format!("expected 3 fields (name, x, y), found {}", row.len()),
            });
        }
        records.push(LocationRecord {
            name: field(&row, 0, "location name")?.to_string(),
            x: coordinate(&row, 1, "x coordinate")?,
            y: coordinate(&row, 2, "y coordinate")?,
        });
    }
    Ok(records)
}

/// Parse `name1,name2` records.
pub fn read_connections<R: Read>(source: R) -> Result<Vec<ConnectionRecord>> {
    let mut records = Vec::new();
    for row in reader(source).records() {
        let row = row?;
        if row.len() != 2 {
            return Err(Error::MalformedRecord {
                line: line_of(&row),
                message: format!("expected 2 fields (name1, name2), found {}", row.len()),
            });
        }
        records.push(ConnectionRecord {
            from: field(&row, 0, "first location name")?.to_string(),
            to: field(&row, 1, "second location name")?.to_string(),
        });
    }
    Ok(records)
}

/// Build a registry from a coordinate file.
pub fn load_registry(path: &Path) -> Result<LocationRegistry> {
    let records = read_locations(fs::File::open(path)?)?;
    debug!(path = %path.display(), records = records.len(), "read location records");
    LocationRegistry::from_records(records.into_iter().map(|r| (r.name, r.x, r.y)))
}

/// Build a graph from a connection file, resolving names through `registry`.
pub fn load_graph(path: &Path, registry: &LocationRegistry) -> Result<WeightedGraph> {
    let records = read_connections(fs::File::open(path)?)?;
    debug!(path = %path.display(), records = records.len(), "read connection records");
    WeightedGraph::build(records.into_iter().map(|r| (r.from, r.to)), registry)
}
