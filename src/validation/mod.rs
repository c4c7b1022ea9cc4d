//! Validation Engine
//!
//! Structural rules and the line scanner that applies them.

pub mod engine;
pub mod rules;

pub use engine::{Diagnostic, ValidationResult, validate_document};
pub use rules::Rule;
