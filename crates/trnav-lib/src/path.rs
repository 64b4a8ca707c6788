//! Shortest-path search over a [`WeightedGraph`].
//!
//! Both searches share one priority-queue loop. Queue entries carry only the
//! node and its cumulative cost; the route is rebuilt from parent pointers
//! once the destination is popped. Entries with equal priority leave the
//! queue in insertion order. When several paths share the optimal cost the
//! engine makes no promise about which one is returned.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::WeightedGraph;

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Sum of the edge weights along `path`.
    pub cost: f64,
    /// Normalized location names from source to destination, inclusive.
    pub path: Vec<String>,
}

impl PathResult {
    pub fn source(&self) -> &str {
        &self.path[0]
    }

    pub fn destination(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Constraints applied during pathfinding.
#[derive(Debug, Default, Clone)]
pub struct SearchConstraints {
    /// Normalized names that must not appear in the resulting path.
    pub avoided: HashSet<String>,
    /// Maximum weight allowed for any single edge.
    pub max_leg: Option<f64>,
}

impl SearchConstraints {
    fn allows(&self, target: &str, weight: f64) -> bool {
        if let Some(limit) = self.max_leg {
            if weight > limit {
                return false;
            }
        }
        !self.avoided.contains(target)
    }
}

/// Find the minimum-cost path between two locations with Dijkstra's algorithm.
///
/// Returns `Ok(None)` when both names are valid but no path connects them,
/// and [`crate::Error::UnknownLocation`] when either name is not in the graph.
pub fn shortest_path(
    graph: &WeightedGraph,
    source: &str,
    destination: &str,
) -> Result<Option<PathResult>> {
    shortest_path_with(graph, source, destination, &SearchConstraints::default())
}

/// [`shortest_path`] with additional constraints.
pub fn shortest_path_with(
    graph: &WeightedGraph,
    source: &str,
    destination: &str,
    constraints: &SearchConstraints,
) -> Result<Option<PathResult>> {
    let source = graph.resolve(source)?;
    let destination = graph.resolve(destination)?;
    Ok(search(graph, &source, &destination, constraints, |_| 0.0))
}

/// Find the minimum-cost path with A*, guided by the straight-line distance
/// to the destination. Since every edge weight is itself a straight-line
/// distance the heuristic never overestimates, so the returned cost matches
/// [`shortest_path`].
pub fn shortest_path_a_star(
    graph: &WeightedGraph,
    source: &str,
    destination: &str,
) -> Result<Option<PathResult>> {
    shortest_path_a_star_with(graph, source, destination, &SearchConstraints::default())
}

/// [`shortest_path_a_star`] with additional constraints.
pub fn shortest_path_a_star_with(
    graph: &WeightedGraph,
    source: &str,
    destination: &str,
    constraints: &SearchConstraints,
) -> Result<Option<PathResult>> {
    let source = graph.resolve(source)?;
    let destination = graph.resolve(destination)?;
    let goal = graph.position(&destination);
    Ok(search(graph, &source, &destination, constraints, |node| {
        match (goal, graph.position(node)) {
            (Some(goal), Some(current)) => current.distance_to(&goal),
            _ => 0.0,
        }
    }))
}

fn search<'g, H>(
    graph: &'g WeightedGraph,
    source: &str,
    destination: &str,
    constraints: &SearchConstraints,
    heuristic: H,
) -> Option<PathResult>
where
    H: Fn(&str) -> f64,
{
    if constraints.avoided.contains(source) || constraints.avoided.contains(destination) {
        return None;
    }

    let mut best_known: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0_u64;
    let mut expanded = 0_usize;

    let source = graph.key_of(source)?;
    best_known.insert(source, 0.0);
    queue.push(QueueEntry::new(source, 0.0, heuristic(source), sequence));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        let current_cost = entry.cost.0;
        if current_cost > best_known.get(current).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        expanded += 1;

        if current == destination {
            let path = reconstruct_path(&parents, source, current);
            debug!(
                source,
                destination,
                cost = current_cost,
                hops = path.len() - 1,
                expanded,
                "path found"
            );
            return Some(PathResult {
                cost: current_cost,
                path,
            });
        }

        let Some(edges) = graph.neighbours(current) else {
            continue;
        };
        for (next, &weight) in edges {
            if !constraints.allows(next, weight) {
                continue;
            }
            let next_cost = current_cost + weight;
            if next_cost < best_known.get(next.as_str()).copied().unwrap_or(f64::INFINITY) {
                best_known.insert(next.as_str(), next_cost);
                parents.insert(next.as_str(), current);
                sequence += 1;
                queue.push(QueueEntry::new(
                    next.as_str(),
                    next_cost,
                    heuristic(next.as_str()),
                    sequence,
                ));
            }
        }
    }

    debug!(source, destination, expanded, "no path");
    None
}

fn reconstruct_path(parents: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        match parents.get(current) {
            Some(&parent) => {
                path.push(parent.to_string());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
    priority: FloatOrd,
    sequence: u64,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64, heuristic: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            priority: FloatOrd(cost + heuristic),
            sequence,
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; earlier
        // insertions win ties.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
