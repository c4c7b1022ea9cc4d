//! Validation Engine
//!
//! Single pass over a document's normalized lines, followed by the
//! whole-document checks.

use serde::Serialize;

use super::rules::{self, DIV_CLOSE, DIV_OPEN, Rule};
use crate::document::Document;

/// Number of separator lines a well-formed front-matter header has
const HEADER_DELIMITERS: usize = 2;

/// A diagnostic message for a structural violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub rule: Rule,
    /// 0-based line position, `None` for document-level diagnostics
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn at_line(rule: Rule, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule,
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn for_document(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            line: None,
            message: message.into(),
        }
    }
}

/// Result of validating a document
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_line_error(&mut self, rule: Rule, line: usize, message: &str) {
        self.diagnostics.push(Diagnostic::at_line(rule, line, message));
    }

    pub fn add_document_error(&mut self, rule: Rule, message: &str) {
        self.diagnostics.push(Diagnostic::for_document(rule, message));
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// State threaded through the per-line pass
#[derive(Debug, Default)]
struct ScanState {
    separators: usize,
    result: ValidationResult,
}

impl ScanState {
    /// Body rules only apply once the header has been closed
    fn in_body(&self) -> bool {
        self.separators >= HEADER_DELIMITERS
    }

    fn visit(mut self, (position, line): (usize, &str)) -> Self {
        if rules::is_separator(line) {
            self.separators += 1;
        }
        if self.in_body() {
            for (rule, message) in rules::body_violations(line) {
                self.result.add_line_error(rule, position, message);
            }
        }
        self
    }
}

/// Validate an entire document
pub fn validate_document(document: &Document) -> ValidationResult {
    let state = document
        .numbered_lines()
        .fold(ScanState::default(), ScanState::visit);

    let mut result = state.result;
    check_header_cardinality(state.separators, &mut result);
    check_container_balance(&document.lines, &mut result);

    log::debug!(
        "{}: {} lines, {} separators, {} diagnostics",
        document.source,
        document.lines.len(),
        state.separators,
        result.diagnostics.len()
    );

    result
}

fn check_header_cardinality(separators: usize, result: &mut ValidationResult) {
    if separators != HEADER_DELIMITERS {
        result.add_document_error(
            Rule::HeaderCardinality,
            "--- occurs too few or too many times. It must occur exactly twice at the beginning and end of the Quarto header",
        );
    }
}

/// Compare aggregate tag counts over the concatenated lines; nesting is not checked
fn check_container_balance(lines: &[String], result: &mut ValidationResult) {
    let joined = lines.concat();
    let opening = joined.matches(DIV_OPEN).count();
    let closing = joined.matches(DIV_CLOSE).count();

    match opening.cmp(&closing) {
        std::cmp::Ordering::Greater => result.add_document_error(
            Rule::ContainerBalance,
            "more opening than closing div tags",
        ),
        std::cmp::Ordering::Less => result.add_document_error(
            Rule::ContainerBalance,
            "more closing than opening div tags",
        ),
        std::cmp::Ordering::Equal => {}
    }
}
