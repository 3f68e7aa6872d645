//! Source-line correlation for WebGAL parse output.
//!
//! The playground shows a script in one pane and the parser's output, printed
//! as JSON, in the other. This crate maps a line of the script to the sentence
//! node that represents it inside that JSON text, and finds how far the node
//! extends so it can be selected.
//!
//! Correlation is ordinal: the Nth line carrying a `"commandRaw"` key inside
//! the re-serialized `sentenceList` belongs to script line N.
//!
//! # Examples
//!
//! ```
//! use scene_locate::{end_line_of, locate};
//!
//! let content = "{\n  \"sentenceList\": [\n    {\n      \"commandRaw\": \"say a\"\n    }\n  ]\n}";
//! let position = locate(content, 1).unwrap();
//! assert_eq!(position.line, 4);
//! assert_eq!(end_line_of(content, position.line), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod extent;
pub mod lines;
pub mod locate;
pub mod position;
pub mod selection;

pub use error::{LocateError, Result};
pub use extent::end_line_of;
pub use locate::{COMMAND_RAW_KEY, SENTENCE_LIST_KEY, locate, try_locate};
pub use position::{Position, Selection};
pub use selection::{SELECTION_CONTEXT_LINES, selection_for};
