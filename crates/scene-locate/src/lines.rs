//! Line helpers shared by the locator and the extent finder.
//!
//! Lines are split on `\n` only, so a trailing newline produces a final empty
//! line. This matches how the editor model counts lines.

/// Split text into lines on `\n`.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Zero-based index of the line containing byte `offset`.
///
/// Counts the newlines before `offset`.
#[must_use]
pub fn line_index_of_offset(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count()
}

/// Column of the first non-whitespace character, or `None` for a blank line.
///
/// Measured in characters, so multi-byte indentation counts once per char.
#[must_use]
pub fn indentation(line: &str) -> Option<usize> {
    line.chars().position(|c| !c.is_whitespace())
}
