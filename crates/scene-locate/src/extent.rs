//! Extent of a node in pretty-printed JSON.
//!
//! Brackets are not matched. The closing line of a node is found by
//! indentation alone, which holds for output printed with a fixed indent.

use crate::lines::{indentation, split_lines};

/// 1-based line on which the node opened at `start_line` closes.
///
/// Scans forward from the line after `start_line` for the first line that
/// is indented no deeper than the start line and contains `}`. Falls back to
/// the last line when nothing closes the node, when `start_line` is blank, or
/// when `start_line` is out of range. The result is always a valid line of
/// `content`.
///
/// # Examples
///
/// ```
/// use scene_locate::end_line_of;
///
/// let content = "[\n  {\n    \"a\": 1\n  }\n]";
/// assert_eq!(end_line_of(content, 2), 4);
/// assert_eq!(end_line_of(content, 0), 5);
/// ```
#[must_use]
pub fn end_line_of(content: &str, start_line: usize) -> usize {
    let lines = split_lines(content);
    let last = lines.len();

    if start_line < 1 || start_line > last {
        return last;
    }

    // A blank start line has no indentation, so no later line can close it.
    let Some(start_indent) = indentation(lines[start_line - 1]) else {
        return last;
    };

    lines
        .iter()
        .enumerate()
        .skip(start_line)
        .find(|(_, line)| {
            line.contains('}') && indentation(line).is_some_and(|indent| indent <= start_indent)
        })
        .map_or(last, |(index, _)| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NESTED: &str = "{\n  \"sentenceList\": [\n    {\n      \"args\": [\n        {\n          \"key\": \"next\"\n        }\n      ],\n      \"commandRaw\": \"a\"\n    }\n  ]\n}";

    #[rstest]
    #[case::outer_object(1, 12)]
    #[case::sentence(3, 10)]
    #[case::inner_arg(5, 7)]
    #[case::marker_line(9, 10)]
    #[case::last_line(12, 12)]
    fn test_end_line_of_nested(#[case] start: usize, #[case] expected: usize) {
        assert_eq!(end_line_of(NESTED, start), expected);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::past_end(13)]
    #[case::far_past_end(usize::MAX)]
    fn test_end_line_of_out_of_range(#[case] start: usize) {
        assert_eq!(end_line_of(NESTED, start), 12);
    }

    #[test]
    fn test_end_line_of_skips_deeper_closers() {
        let content = "  {\n    }\n      }\n  },\nx";
        assert_eq!(end_line_of(content, 1), 4);
    }

    #[rstest]
    #[case::empty_line("{\n\n  \"a\": 1\n}\nx", 2, 5)]
    #[case::whitespace_line("{\n   \n}\n}", 2, 4)]
    fn test_end_line_of_blank_start_runs_to_end(
        #[case] content: &str,
        #[case] start: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(end_line_of(content, start), expected);
    }

    #[test]
    fn test_end_line_of_empty_content() {
        assert_eq!(end_line_of("", 1), 1);
        assert_eq!(end_line_of("", 0), 1);
    }
}
