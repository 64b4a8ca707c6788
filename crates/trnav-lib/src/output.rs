use serde::Serialize;

use crate::error::{Error, Result};
use crate::location::{LocationRegistry, Position};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Length of the leg arriving at this step; `None` for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Structured representation of a planned route that presentation layers
/// can render or serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub start: String,
    pub goal: String,
    pub total_distance: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary annotated with positions and
    /// per-leg distances.
    pub fn from_plan(registry: &LocationRegistry, plan: &RoutePlan) -> Result<Self> {
        let (Some(first), Some(last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut previous: Option<Position> = None;
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let position = registry.get(name).ok().map(|location| location.position());
                let distance = match (previous, position) {
                    (Some(from), Some(to)) => Some(from.distance_to(&to)),
                    _ => None,
                };
                previous = position;
                RouteStep {
                    index,
                    name: name.clone(),
                    position,
                    distance,
                }
            })
            .collect();

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: first.clone(),
            goal: last.clone(),
            total_distance: plan.total_distance,
            steps,
        })
    }

    /// Single-line rendering, e.g. `Total Distance: 10.00. Path: a -> b -> c`.
    pub fn render_plain(&self) -> String {
        let path = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("Total Distance: {:.2}. Path: {}", self.total_distance, path)
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
