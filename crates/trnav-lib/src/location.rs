//! Named locations positioned on a 2D plane.
//!
//! Names are normalized once at ingestion (trimmed and lowercased) so every
//! later comparison in the registry and the graph is a plain string equality.
//! Coordinates are validated on every write path: construction, registry
//! insertion and the per-axis setters all reject negative or non-finite
//! values.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Axis, Error, Result};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Largest accepted coordinate. Keeps edge weights and the sums of weights
/// along any path finite.
pub const MAX_COORDINATE: f64 = 1e150;

/// Number of suggestions attached to [`Error::UnknownLocation`].
pub(crate) const DEFAULT_SUGGESTIONS: usize = 3;

/// Normalize a user-supplied location name to its canonical form.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Cartesian coordinates for a location.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A named point on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    position: Position,
}

impl Location {
    /// Create a location, normalizing the name and validating both coordinates.
    pub fn new(name: &str, x: f64, y: f64) -> Result<Self> {
        let name = normalize_name(name);
        validate_coordinate(&name, Axis::X, x)?;
        validate_coordinate(&name, Axis::Y, y)?;
        Ok(Self {
            name,
            position: Position { x, y },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the location along the x axis. A rejected value leaves the
    /// current coordinate untouched.
    pub fn set_x(&mut self, x: f64) -> Result<()> {
        validate_coordinate(&self.name, Axis::X, x)?;
        self.position.x = x;
        Ok(())
    }

    /// Move the location along the y axis. A rejected value leaves the
    /// current coordinate untouched.
    pub fn set_y(&mut self, y: f64) -> Result<()> {
        validate_coordinate(&self.name, Axis::Y, y)?;
        self.position.y = y;
        Ok(())
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.position.distance_to(&other.position)
    }
}

fn validate_coordinate(name: &str, axis: Axis, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=MAX_COORDINATE).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate {
            name: name.to_string(),
            axis,
            value,
        })
    }
}

/// Collection of locations keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: HashMap<String, Location>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(name, x, y)` records. Later records overwrite
    /// earlier ones with the same normalized name.
    pub fn from_records<I, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for (name, x, y) in records {
            registry.add(name.as_ref(), x, y)?;
        }
        debug!(locations = registry.len(), "built location registry");
        Ok(registry)
    }

    /// Insert or overwrite a location.
    pub fn add(&mut self, name: &str, x: f64, y: f64) -> Result<()> {
        let location = Location::new(name, x, y)?;
        self.locations.insert(location.name.clone(), location);
        Ok(())
    }

    /// Lookup a location by case-insensitive name.
    pub fn get(&self, name: &str) -> Result<&Location> {
        let key = normalize_name(name);
        self.locations.get(&key).ok_or_else(|| self.unknown(&key))
    }

    /// Mutable lookup, used to relocate a location through its setters.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Location> {
        let key = normalize_name(name);
        // Suggestions read the whole map, so they are gathered before the
        // mutable borrow is taken.
        let suggestions = if self.locations.contains_key(&key) {
            Vec::new()
        } else {
            self.fuzzy_matches(&key, DEFAULT_SUGGESTIONS)
        };
        match self.locations.get_mut(&key) {
            Some(location) => Ok(location),
            None => Err(Error::UnknownLocation {
                name: key,
                suggestions,
            }),
        }
    }

    /// Euclidean distance between two named locations.
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        let first = self.get(a)?;
        let second = self.get(b)?;
        Ok(first.distance_to(second))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All normalized names, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names similar to `name`, most similar first, at most `limit` entries.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.locations.keys().map(String::as_str), name, limit)
    }

    fn unknown(&self, key: &str) -> Error {
        Error::UnknownLocation {
            name: key.to_string(),
            suggestions: self.fuzzy_matches(key, DEFAULT_SUGGESTIONS),
        }
    }
}

/// Rank `candidates` by Jaro-Winkler similarity to `name`.
pub(crate) fn fuzzy_matches<'a>(
    candidates: impl Iterator<Item = &'a str>,
    name: &str,
    limit: usize,
) -> Vec<String> {
    let needle = normalize_name(name);
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| (strsim::jaro_winkler(&needle, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
