//! trnav library entry points.
//!
//! This crate holds named locations on a 2D plane, builds an undirected graph
//! weighted by Euclidean distance, and finds shortest paths through it.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!
//! The three core operations are [`LocationRegistry::from_records`],
//! [`WeightedGraph::build`] and [`shortest_path`].

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod location;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Axis, Error, Result};
pub use graph::WeightedGraph;
pub use loader::{load_graph, load_registry, read_connections, read_locations};
pub use location::{normalize_name, Location, LocationRegistry, Position, MAX_COORDINATE};
pub use output::{RouteStep, RouteSummary};
pub use path::{
    shortest_path, shortest_path_a_star, shortest_path_a_star_with, shortest_path_with,
    PathResult, SearchConstraints,
};
pub use routing::{plan_route, RouteAlgorithm, RouteConstraints, RoutePlan, RouteRequest};
