//! Route planning strategies.
//!
//! Each algorithm is wrapped in a `RoutePlanner` so `plan_route` can pick one
//! at runtime without knowing how it searches.

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::path::{shortest_path_a_star_with, shortest_path_with, PathResult, SearchConstraints};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Ok(None)` when both endpoints exist but are not connected.
    fn find_path(
        &self,
        graph: &WeightedGraph,
        start: &str,
        goal: &str,
        constraints: &SearchConstraints,
    ) -> Result<Option<PathResult>>;
}

/// Dijkstra's algorithm planner.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &WeightedGraph,
        start: &str,
        goal: &str,
        constraints: &SearchConstraints,
    ) -> Result<Option<PathResult>> {
        shortest_path_with(graph, start, goal, constraints)
    }
}

/// A* planner using straight-line distance to the goal as its heuristic.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &WeightedGraph,
        start: &str,
        goal: &str,
        constraints: &SearchConstraints,
    ) -> Result<Option<PathResult>> {
        shortest_path_a_star_with(graph, start, goal, constraints)
    }
}

/// Select the planner implementing `algorithm`.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
