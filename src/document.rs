//! Document Loading
//!
//! Reads a source fully into memory and normalizes its lines before scanning.

use anyhow::{Context, Result};
use std::path::Path;

/// A source document: its name and its normalized lines, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub source: String,
    pub lines: Vec<String>,
}

impl Document {
    /// Build a document from in-memory text.
    ///
    /// `\r\n`, `\n` and a lone `\r` all end a line.
    pub fn from_text(source: impl Into<String>, text: &str) -> Self {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            source: source.into(),
            lines: text.lines().map(normalize_line).collect(),
        }
    }

    /// Build a document from already split lines (useful for testing)
    pub fn from_lines<I, S>(source: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            source: source.into(),
            lines: lines
                .into_iter()
                .map(|l| normalize_line(l.as_ref()))
                .collect(),
        }
    }

    /// Read a document from disk.
    ///
    /// The file handle lives only for the duration of the read; the content is
    /// fully materialized before any scanning starts.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("could not read file {}", path.display()))?;

        log::debug!("Loaded {} ({} bytes)", path.display(), text.len());

        Ok(Self::from_text(path.display().to_string(), &text))
    }

    /// Iterate over `(position, line)` pairs with true 0-based positions
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().map(String::as_str).enumerate()
    }
}

/// Strip trailing whitespace and drop every apostrophe
pub fn normalize_line(raw: &str) -> String {
    raw.trim_end().replace('\'', "")
}
