//! Mapping script lines to sentence nodes in the serialized output.

use crate::error::{LocateError, Result};
use crate::lines::line_index_of_offset;
use crate::position::Position;
use serde_json::Value;
use tracing::debug;

/// Key of the sentence array in the parser output.
pub const SENTENCE_LIST_KEY: &str = "sentenceList";

/// Key present on every sentence produced from a script line.
pub const COMMAND_RAW_KEY: &str = "commandRaw";

/// Locate the sentence for 1-based script line `line_number` in `content`.
///
/// Returns `None` when the output is not JSON, has no array-valued
/// `sentenceList`, `line_number` is zero, or there are fewer sentences than
/// requested. A miss is an ordinary outcome (e.g. the cursor sits past the
/// last sentence) and is only logged at debug level.
///
/// # Examples
///
/// ```
/// use scene_locate::locate;
///
/// assert!(locate("{\"foo\": 1}", 1).is_none());
/// assert!(locate("not json", 1).is_none());
/// ```
#[must_use]
pub fn locate(content: &str, line_number: usize) -> Option<Position> {
    match try_locate(content, line_number) {
        Ok(position) => Some(position),
        Err(e) => {
            debug!(line_number, error = %e, "no sentence position for line");
            None
        }
    }
}

/// Like [`locate`], but reports why no position was found.
///
/// The `sentenceList` value is re-printed with two-space indentation and the
/// Nth line containing `"commandRaw"` is taken as script line N. Line numbers
/// in the re-printed block are offset by the line on which `"sentenceList"`
/// first appears in `content`, so `content` must itself be printed with the
/// same two-space convention for the result to land on the marker line.
///
/// `content` is parsed with `serde_json`, which is stricter than a browser's
/// `JSON.parse`: numbers outside the `f64` range (such as `1e400`) and
/// nesting deeper than 128 levels are rejected as [`LocateError::InvalidJson`].
///
/// # Errors
///
/// See [`LocateError`] for the individual cases.
pub fn try_locate(content: &str, line_number: usize) -> Result<Position> {
    let data: Value = serde_json::from_str(content)?;

    let sentences = data
        .get(SENTENCE_LIST_KEY)
        .ok_or(LocateError::MissingSentenceList)?;
    if !sentences.is_array() {
        return Err(LocateError::NotAnArray);
    }
    if line_number < 1 {
        return Err(LocateError::LineOutOfRange(line_number));
    }

    let printed = serde_json::to_string_pretty(sentences)?;

    let quoted_key = format!("\"{SENTENCE_LIST_KEY}\"");
    let key_offset = content
        .find(&quoted_key)
        .ok_or(LocateError::MissingSentenceList)?;
    let base_line = line_index_of_offset(content, key_offset);

    let marker = format!("\"{COMMAND_RAW_KEY}\"");
    let target = line_number - 1;
    let mut found = 0;
    for (index, line) in printed.split('\n').enumerate() {
        if !line.contains(&marker) {
            continue;
        }
        if found == target {
            return Ok(Position::line_start(base_line + index + 1));
        }
        found += 1;
    }

    Err(LocateError::MarkerNotFound {
        line: line_number,
        found,
    })
}
