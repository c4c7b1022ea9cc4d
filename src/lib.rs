//! Quarto Markdown Linter
//!
//! A small, line-oriented structural linter for Quarto-style markdown.
//!
//! This library provides:
//! - Document loading and line normalization
//! - Front-matter, fence, math and container tag checks
//! - Per-source error isolation for batches of files
//! - Text and JSON diagnostic output

pub mod config;
pub mod document;
pub mod lint;
pub mod output;
pub mod validation;

pub use config::Config;
pub use document::Document;
pub use lint::{Report, lint_document, lint_source, lint_sources};
pub use output::OutputFormat;
pub use validation::{Diagnostic, Rule, validate_document};

/// No diagnostics were emitted
pub const EXIT_SUCCESS: i32 = 0;
/// At least one structural diagnostic was emitted
pub const EXIT_LINT_FAILED: i32 = 1;
/// A source or the configuration could not be read
pub const EXIT_IO_ERROR: i32 = 2;

/// Exit status for a finished batch
pub fn exit_code(reports: &[Report], exit_zero: bool) -> i32 {
    if exit_zero {
        EXIT_SUCCESS
    } else if reports.iter().any(Report::has_io_error) {
        EXIT_IO_ERROR
    } else if reports.iter().all(Report::is_clean) {
        EXIT_SUCCESS
    } else {
        EXIT_LINT_FAILED
    }
}
