use thiserror::Error;

/// Convenient result alias for the trnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name is not present in the registry or graph.
    #[error("unknown location name: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when both endpoints exist but no sequence of edges connects them.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a coordinate is negative, not a finite number, or beyond
    /// [`crate::location::MAX_COORDINATE`].
    #[error(
        "invalid {axis} coordinate {value} for location {name}; \
         coordinates must be finite, non-negative and at most {max:e}",
        max = crate::location::MAX_COORDINATE
    )]
    InvalidCoordinate {
        name: String,
        axis: Axis,
        value: f64,
    },

    /// Raised when a route's maximum leg length is negative or not a number.
    #[error("invalid maximum leg length {value}; it must be a finite non-negative number")]
    InvalidLegLimit { value: f64 },

    /// Raised when the loader meets a record it cannot interpret.
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build an [`Error::UnknownLocation`] without suggestions.
    pub fn unknown(name: impl Into<String>) -> Self {
        Error::UnknownLocation {
            name: name.into(),
            suggestions: Vec::new(),
        }
    }
}

/// Coordinate axis, used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
