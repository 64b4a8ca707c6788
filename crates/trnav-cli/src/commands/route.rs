//! Route command handler for computing paths between locations.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use trnav_lib::{
    plan_route, Error as RouteError, RouteAlgorithm, RouteConstraints, RouteRequest, RouteSummary,
};

use crate::commands::{load_map, MapPaths};
use crate::output::OutputFormat;
use crate::prompt::prompt_for_location;

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Starting location; prompted for when absent.
    pub from: Option<String>,
    /// Destination location; prompted for when absent.
    pub to: Option<String>,
    pub algorithm: RouteAlgorithm,
    /// Locations to avoid.
    pub avoid: Vec<String>,
    /// Maximum length of a single leg.
    pub max_leg: Option<f64>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self, from: String, to: String) -> RouteRequest {
        RouteRequest {
            start: from,
            goal: to,
            algorithm: self.algorithm,
            constraints: RouteConstraints {
                avoid: self.avoid.clone(),
                max_leg: self.max_leg,
            },
        }
    }
}

/// Handle the route subcommand.
///
/// Endpoints missing from `args` are read interactively from `input`, with
/// the questions written to `prompts`. Only the route itself goes to `out`.
pub fn handle_route_command<R, P, W>(
    input: &mut R,
    prompts: &mut P,
    out: &mut W,
    paths: &MapPaths,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let (registry, graph) = load_map(paths)?;

    let from = match &args.from {
        Some(name) => name.clone(),
        None => prompt_for_location(input, prompts, "Enter starting city:", &registry)?,
    };
    let to = match &args.to {
        Some(name) => name.clone(),
        None => prompt_for_location(input, prompts, "Enter destination city:", &registry)?,
    };

    let request = args.to_request(from, to);
    let plan = match plan_route(&registry, &graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(&request, err)),
    };

    let summary = RouteSummary::from_plan(&registry, &plan)
        .context("failed to build route summary for display")?;
    format.render_route(out, &summary)
}

fn handle_route_failure(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::RouteNotFound { start, goal } => anyhow::anyhow!(
            format_route_not_found_message(&start, &goal, &request.constraints)
        ),
        other => describe_error(other),
    }
}

/// Convert library errors into user-facing messages.
pub fn describe_error(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(
    start: &str,
    goal: &str,
    constraints: &RouteConstraints,
) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    let mut tips = Vec::new();
    if constraints.max_leg.is_some() {
        tips.push("increase --max-leg");
    }
    if !constraints.avoid.is_empty() {
        tips.push("remove some --avoid locations");
    }
    if tips.is_empty() {
        message.push_str(" The two locations are not connected.");
    } else {
        message.push(' ');
        message.push_str(&format!("Try {}.", tips.join(", ")));
    }
    message
}
