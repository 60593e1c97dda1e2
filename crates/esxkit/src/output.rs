//! Output formatting: JSON, compact JSON, YAML.
//!
//! Every adapter run ends in exactly one report on stdout, rendered in
//! the format selected by `--output`. Diagnostics and logs go to stderr.

use std::io::{self, Write};

use esxkit_core::Report;

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Renderers ────────────────────────────────────────────────────────

/// Render any serializable value in the chosen format.
pub fn render<T: serde::Serialize>(format: OutputFormat, data: &T) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

fn render_json<T: serde::Serialize>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Render(e.to_string()))
}

fn render_yaml<T: serde::Serialize>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data)
        .map(|s| s.trim_end().to_owned())
        .map_err(|e| CliError::Render(e.to_string()))
}

// ── Printing ─────────────────────────────────────────────────────────

/// Print a report to stdout. `--quiet` only hides successful reports;
/// a failure report is always printed.
pub fn print_report(report: &Report, format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    if quiet && !report.is_failed() {
        return Ok(());
    }
    let rendered = render(format, report)?;
    print_output(&rendered)
}

/// Write rendered output to stdout with a trailing newline.
pub fn print_output(output: &str) -> Result<(), CliError> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
