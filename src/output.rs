//! Diagnostic Output
//!
//! Renders reports as plain text lines or as JSON lines.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::lint::Report;
use crate::validation::Diagnostic;

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<source>: Error: <message> on line <n>`
    #[default]
    Text,
    /// One JSON object per diagnostic
    Json,
}

/// Format a diagnostic as a single text line
pub fn format_text(source: &str, diagnostic: &Diagnostic) -> String {
    match diagnostic.line {
        Some(line) => format!(
            "{}: Error: {} on line {}",
            source, diagnostic.message, line
        ),
        None => format!("{}: Error: {}.", source, diagnostic.message),
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    source: &'a str,
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
}

/// Format a diagnostic as a single JSON line
pub fn format_json(source: &str, diagnostic: &Diagnostic) -> Result<String> {
    let record = JsonRecord { source, diagnostic };
    Ok(serde_json::to_string(&record)?)
}

/// Write every diagnostic of every report, in order
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[Report],
    format: OutputFormat,
) -> Result<()> {
    for report in reports {
        for diagnostic in &report.diagnostics {
            let line = match format {
                OutputFormat::Text => format_text(&report.source, diagnostic),
                OutputFormat::Json => format_json(&report.source, diagnostic)?,
            };
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}
