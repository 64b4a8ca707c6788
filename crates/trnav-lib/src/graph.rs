use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::location::{
    fuzzy_matches, normalize_name, LocationRegistry, Position, DEFAULT_SUGGESTIONS,
};

/// Undirected graph of locations weighted by Euclidean distance.
///
/// Every location known to the registry at build time is a node, including
/// locations without any recorded connection. Weights are stored in both
/// directions so `neighbours(a)[b] == neighbours(b)[a]` always holds.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: HashMap<String, HashMap<String, f64>>,
    positions: HashMap<String, Position>,
}

impl WeightedGraph {
    /// Build a graph from connection pairs, resolving names through `registry`.
    ///
    /// Fails on the first pair that references a name the registry does not
    /// know. Pairs connecting a location to itself are skipped.
    pub fn build<I, A, B>(pairs: I, registry: &LocationRegistry) -> Result<Self>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::default();
        for location in registry.iter() {
            graph.add_location(location.name(), location.position());
        }

        for (first, second) in pairs {
            graph.connect(first.as_ref(), second.as_ref(), registry)?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built weighted graph"
        );
        Ok(graph)
    }

    /// Add one undirected connection. Re-adding an existing pair recomputes
    /// the same weight and leaves the graph unchanged.
    pub fn connect(
        &mut self,
        first: &str,
        second: &str,
        registry: &LocationRegistry,
    ) -> Result<()> {
        let a = registry.get(first)?;
        let b = registry.get(second)?;

        if a.name() == b.name() {
            warn!(location = a.name(), "skipping self-loop connection");
            return Ok(());
        }

        self.add_location(a.name(), a.position());
        self.add_location(b.name(), b.position());

        let weight = a.distance_to(b);
        if let Some(edges) = self.adjacency.get_mut(a.name()) {
            edges.insert(b.name().to_string(), weight);
        }
        if let Some(edges) = self.adjacency.get_mut(b.name()) {
            edges.insert(a.name().to_string(), weight);
        }
        Ok(())
    }

    fn add_location(&mut self, name: &str, position: Position) {
        self.adjacency.entry(name.to_string()).or_default();
        self.positions.insert(name.to_string(), position);
    }

    /// Return the neighbour → weight mapping for a location.
    ///
    /// `Some` with an empty map means the location is known but has no
    /// connections; `None` means the name is not part of the graph.
    pub fn neighbours(&self, name: &str) -> Option<&HashMap<String, f64>> {
        self.adjacency.get(name)
    }

    /// The graph's own key for `name`, borrowed for the graph's lifetime.
    pub(crate) fn key_of(&self, name: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(name)
            .map(|(key, _)| key.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Weight of the direct edge between two locations, if any.
    pub fn edge_weight(&self, first: &str, second: &str) -> Option<f64> {
        self.adjacency
            .get(first)
            .and_then(|edges| edges.get(second))
            .copied()
    }

    /// Position recorded for a location when the graph was built.
    pub fn position(&self, name: &str) -> Option<Position> {
        self.positions.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Resolve a user-supplied name to the canonical key used by the graph.
    pub fn resolve(&self, name: &str) -> Result<String> {
        let key = normalize_name(name);
        if self.contains(&key) {
            Ok(key)
        } else {
            Err(Error::UnknownLocation {
                suggestions: fuzzy_matches(self.locations(), &key, DEFAULT_SUGGESTIONS),
                name: key,
            })
        }
    }
}
