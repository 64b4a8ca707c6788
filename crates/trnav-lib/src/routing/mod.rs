//! Route planning on top of the shortest-path engine.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (Dijkstra, A*)
//! - [`RouteConstraints`] - Constraints expressed with user-facing names
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Unlike the engine functions in [`crate::path`], `plan_route` reports an
//! unreachable goal as [`Error::RouteNotFound`] so callers that only care
//! about success can use `?` throughout.
//!
//! # Example
//!
//! ```
//! use trnav_lib::{plan_route, LocationRegistry, RouteRequest, WeightedGraph};
//!
//! let registry = LocationRegistry::from_records([("A", 0.0, 0.0), ("B", 3.0, 4.0)])?;
//! let graph = WeightedGraph::build([("A", "B")], &registry)?;
//! let plan = plan_route(&registry, &graph, &RouteRequest::dijkstra("a", "b"))?;
//! assert_eq!(plan.total_distance, 5.0);
//! # Ok::<(), trnav_lib::Error>(())
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use crate::location::LocationRegistry;
use crate::path::SearchConstraints;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm.
    #[default]
    Dijkstra,
    /// A* search guided by straight-line distance.
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "a-star" | "astar" | "a_star" => Ok(RouteAlgorithm::AStar),
            other => Err(format!("unsupported algorithm '{other}'")),
        }
    }
}

/// Constraints applied during route planning.
#[derive(Debug, Clone, Default)]
pub struct RouteConstraints {
    /// Location names that must not appear in the route.
    pub avoid: Vec<String>,
    /// Maximum length of a single leg.
    pub max_leg: Option<f64>,
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    pub constraints: RouteConstraints,
}

impl RouteRequest {
    /// Convenience constructor for Dijkstra routes without extra constraints.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
            constraints: RouteConstraints::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub total_distance: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a name against the registry first so suggestions cover every
/// known location, then make sure the graph knows it too.
fn resolve_location(
    registry: &LocationRegistry,
    graph: &WeightedGraph,
    name: &str,
) -> Result<String> {
    let location = registry.get(name)?;
    graph.resolve(location.name())
}

fn resolve_avoided(
    registry: &LocationRegistry,
    graph: &WeightedGraph,
    avoided: &[String],
) -> Result<HashSet<String>> {
    avoided
        .iter()
        .map(|name| resolve_location(registry, graph, name))
        .collect()
}

/// Compute a route using the requested algorithm and constraints.
pub fn plan_route(
    registry: &LocationRegistry,
    graph: &WeightedGraph,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let start = resolve_location(registry, graph, &request.start)?;
    let goal = resolve_location(registry, graph, &request.goal)?;

    if let Some(limit) = request.constraints.max_leg {
        if limit.is_nan() || limit < 0.0 {
            return Err(Error::InvalidLegLimit { value: limit });
        }
    }

    let constraints = SearchConstraints {
        avoided: resolve_avoided(registry, graph, &request.constraints.avoid)?,
        max_leg: request.constraints.max_leg,
    };

    let planner = select_planner(request.algorithm);
    debug!(%start, %goal, algorithm = %planner.algorithm(), "planning route");

    let result = planner
        .find_path(graph, &start, &goal, &constraints)?
        .ok_or_else(|| Error::RouteNotFound {
            start: start.clone(),
            goal: goal.clone(),
        })?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start,
        goal,
        steps: result.path,
        total_distance: result.cost,
    })
}
