//! Selection ranges for cursor-follow highlighting.

use crate::extent::end_line_of;
use crate::locate::locate;
use crate::position::Selection;

/// Lines of context shown above the matched marker line.
///
/// With two-space output the sentence's opening brace usually sits this far
/// above its `commandRaw` line.
pub const SELECTION_CONTEXT_LINES: usize = 2;

/// Selection in `content` covering the sentence for script line `line_number`.
///
/// Starts [`SELECTION_CONTEXT_LINES`] above the located line (never before
/// line 1) and ends on the node's closing line. `None` means nothing should
/// be highlighted.
///
/// # Examples
///
/// ```
/// use scene_locate::selection_for;
///
/// let content = "{\n  \"sentenceList\": [\n    {\n      \"command\": 0,\n      \"commandRaw\": \"a\"\n    }\n  ]\n}";
/// let selection = selection_for(content, 1).unwrap();
/// assert_eq!((selection.start_line, selection.end_line), (3, 6));
/// ```
#[must_use]
pub fn selection_for(content: &str, line_number: usize) -> Option<Selection> {
    let position = locate(content, line_number)?;
    let end_line = end_line_of(content, position.line);

    Some(Selection {
        start_line: position
            .line
            .saturating_sub(SELECTION_CONTEXT_LINES)
            .max(1),
        start_column: 1,
        end_line,
        end_column: 1,
    })
}
