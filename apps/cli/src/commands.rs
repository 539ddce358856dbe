use crate::args::Command;
use geofeed_coordinates::{CoordinateParser, FieldFeedback, normalize, validate_field};
use geofeed_domain::Location;
use geofeed_domain::config::{MAX_PRECISION, OutputConfig, OutputFormat};
use serde_json::json;
use std::io::{self, Write};
use tracing::debug;

/// Kind reported in JSON output for blank inputs, which never reach the parser.
const MISSING_KIND: &str = "missing";

/// Runs `command` over `inputs`, writing results to `out` and text-mode errors to `err`.
///
/// Returns the number of inputs that failed.
pub(crate) fn run(
    command: &Command,
    inputs: &[String],
    output: &OutputConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<usize> {
    match command {
        Command::Parse { .. } => parse_inputs(inputs, output, out, err),
        Command::Check { .. } => check_inputs(inputs, output.format, out),
        Command::Normalize { .. } => normalize_inputs(inputs, output.format, out).map(|()| 0),
    }
}

fn parse_inputs(
    inputs: &[String],
    output: &OutputConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<usize> {
    let precision = output.precision.min(MAX_PRECISION);
    let mut failures = 0;

    for input in inputs {
        let feedback = validate_field(input);
        debug!(input = %input, accepted = feedback.is_accepted(), "Parsed input");

        match (&feedback, output.format) {
            (FieldFeedback::Accepted(coordinate), OutputFormat::Text) => {
                writeln!(out, "{coordinate:.precision$}")?;
            },
            (FieldFeedback::Accepted(coordinate), OutputFormat::Json) => {
                writeln!(out, "{}", json!(Location::manual(*coordinate)))?;
            },
            (rejected, format) => {
                failures += 1;
                let message = rejected.message().unwrap_or_default();
                match format {
                    OutputFormat::Text => writeln!(err, "error: {message}")?,
                    OutputFormat::Json => {
                        let kind = match rejected {
                            FieldFeedback::Rejected(e) => e.kind().as_str(),
                            _ => MISSING_KIND,
                        };
                        writeln!(out, "{}", json!({ "input": input, "error": message, "kind": kind }))?;
                    },
                }
            },
        }
    }

    Ok(failures)
}

fn check_inputs(inputs: &[String], format: OutputFormat, out: &mut impl Write) -> io::Result<usize> {
    let parser = CoordinateParser::new();
    let mut failures = 0;

    for input in inputs {
        let valid = parser.is_valid(input.as_str());
        if !valid {
            failures += 1;
        }

        match format {
            OutputFormat::Text => writeln!(out, "{}", if valid { "valid" } else { "invalid" })?,
            OutputFormat::Json => writeln!(out, "{}", json!({ "input": input, "valid": valid }))?,
        }
    }

    Ok(failures)
}

fn normalize_inputs(inputs: &[String], format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    for input in inputs {
        let normalized = normalize(input);
        match format {
            OutputFormat::Text => writeln!(out, "{normalized}")?,
            OutputFormat::Json => {
                writeln!(out, "{}", json!({ "input": input, "normalized": normalized }))?;
            },
        }
    }
    Ok(())
}
