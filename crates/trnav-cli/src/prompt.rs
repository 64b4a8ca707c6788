//! Interactive endpoint selection.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use trnav_lib::{normalize_name, LocationRegistry};

/// Ask for a location name until the registry recognises one.
///
/// Unknown names are reported on `output` and the question is repeated. Fails
/// once `input` is exhausted without a valid answer.
pub fn prompt_for_location<R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    registry: &LocationRegistry,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read location name")?;
        if read == 0 {
            bail!("no location name entered");
        }

        let name = normalize_name(&line);
        if registry.contains(&name) {
            return Ok(name);
        }

        let suggestions = registry.fuzzy_matches(&name, 3);
        if suggestions.is_empty() {
            writeln!(
                output,
                "City named {name} not found. Please enter a valid city name."
            )?;
        } else {
            writeln!(
                output,
                "City named {name} not found. Did you mean: {}?",
                suggestions.join(", ")
            )?;
        }
    }
}
