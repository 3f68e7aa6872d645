//! Scene parser capability.
//!
//! The playground does not care which engine turns script text into a
//! [`Scene`]; it only needs something implementing [`SceneParser`]. Engines
//! are obtained by version through a [`ParserProvider`](crate::provider::ParserProvider).
//!
//! [`BuiltinParser`] ships with the crate so the playground works without an
//! external engine.

mod builtin;

pub use builtin::BuiltinParser;

use crate::domain::Scene;

/// A loaded scene parser.
///
/// Parsing never fails: lines the engine does not understand still become
/// sentences, so the output always has one sentence per script line.
pub trait SceneParser: Send + Sync {
    /// Version identifier of this engine.
    fn version(&self) -> &str;

    /// Parse `text` as the scene `scene_name` located at `base_path`.
    fn parse(&self, text: &str, scene_name: &str, base_path: &str) -> Scene;
}
