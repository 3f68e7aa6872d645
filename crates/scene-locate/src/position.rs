//! Locations inside the serialized parse output.

use serde::Serialize;
use std::fmt;

/// A 1-based location in the JSON text.
///
/// Correlation works at line granularity, so `column` is always 1 for
/// positions produced by [`locate`](crate::locate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

impl Position {
    /// Start of the given 1-based line.
    #[must_use]
    pub fn line_start(line: usize) -> Self {
        Self { line, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A 1-based range in the JSON text, shaped for an editor's selection API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// First selected line.
    pub start_line: usize,
    /// Column on the first line.
    pub start_column: usize,
    /// Last selected line.
    pub end_line: usize,
    /// Column on the last line.
    pub end_column: usize,
}

impl Selection {
    /// Number of lines covered, inclusive of both ends.
    #[must_use]
    pub fn line_span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// Whether `line` falls inside the selection.
    #[must_use]
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_column, self.end_line, self.end_column
        )
    }
}
