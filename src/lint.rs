//! Lint Driver
//!
//! Runs the scanner over a batch of sources. Every source is isolated: a
//! source that cannot be read produces an I/O diagnostic and the batch goes on.

use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::validation::{Diagnostic, Rule, validate_document};

/// Diagnostics produced for one source
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_io_error(&self) -> bool {
        self.diagnostics.iter().any(|d| d.rule == Rule::Io)
    }
}

/// Lint an already loaded document
pub fn lint_document(document: &Document) -> Report {
    Report {
        source: document.source.clone(),
        diagnostics: validate_document(document).diagnostics,
    }
}

/// Load and lint a single source, turning read failures into a diagnostic
pub async fn lint_source(path: &Path) -> Report {
    match Document::load(path).await {
        Ok(document) => lint_document(&document),
        Err(e) => {
            log::warn!("Skipping {}: {:#}", path.display(), e);
            Report {
                source: path.display().to_string(),
                diagnostics: vec![Diagnostic::for_document(
                    Rule::Io,
                    format!("could not read file: {}", e.root_cause()),
                )],
            }
        }
    }
}

/// Lint every source concurrently, returning reports in input order
pub async fn lint_sources(paths: &[PathBuf]) -> Vec<Report> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { lint_source(&path).await }))
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for (path, handle) in paths.iter().zip(handles) {
        match handle.await {
            Ok(report) => reports.push(report),
            Err(e) => {
                log::error!("Lint task for {} failed: {}", path.display(), e);
                reports.push(Report {
                    source: path.display().to_string(),
                    diagnostics: vec![Diagnostic::for_document(
                        Rule::Io,
                        format!("lint task failed: {}", e),
                    )],
                });
            }
        }
    }

    log::info!("Linted {} source(s)", reports.len());
    reports
}
