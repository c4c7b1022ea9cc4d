//! Structural Rules
//!
//! The markers the scanner looks for and the per-line checks built on them.

use serde::Serialize;

/// Front-matter separator token
pub const SEPARATOR: &str = "---";
/// Longer dash runs are horizontal rules, not separators
pub const LONG_DASH_RUN: &str = "----";
/// Code fence marker
pub const FENCE: &str = "```";
/// Fence tagged for R chunks, allowed on its own line
pub const R_FENCE: &str = "```{r}";
/// Math-display marker
pub const MATH: &str = "$$";
pub const DIV_OPEN: &str = "<div>";
pub const DIV_CLOSE: &str = "</div>";

/// Identifies which rule produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    MathIsolation,
    FenceIsolation,
    StraySeparator,
    HeaderCardinality,
    ContainerBalance,
    /// The source could not be read at all
    Io,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::MathIsolation => "math-isolation",
            Rule::FenceIsolation => "fence-isolation",
            Rule::StraySeparator => "stray-separator",
            Rule::HeaderCardinality => "header-cardinality",
            Rule::ContainerBalance => "container-balance",
            Rule::Io => "io",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_separator(line: &str) -> bool {
    line == SEPARATOR
}

/// `$$` somewhere in the line, but the line is not just `$$`
pub fn misplaced_math(line: &str) -> bool {
    line.contains(MATH) && line.trim() != MATH
}

/// A fence is only allowed bare or tagged `{r}`
pub fn misplaced_fence(line: &str) -> bool {
    line.contains(FENCE) && line != FENCE && line != R_FENCE
}

pub fn stray_separator(line: &str) -> bool {
    line.contains(SEPARATOR) && !line.contains(LONG_DASH_RUN) && line != SEPARATOR
}

/// Run every body rule against a line, returning the rules it breaks in a fixed order
pub fn body_violations(line: &str) -> impl Iterator<Item = (Rule, &'static str)> {
    [
        (
            misplaced_math(line),
            Rule::MathIsolation,
            "$$ used in file not on its own line",
        ),
        (
            misplaced_fence(line),
            Rule::FenceIsolation,
            "``` used in file not on its own line",
        ),
        (
            stray_separator(line),
            Rule::StraySeparator,
            "--- used in file not on its own line",
        ),
    ]
    .into_iter()
    .filter_map(|(broken, rule, message)| broken.then_some((rule, message)))
}
