//! Error types for scene-locate operations.

use thiserror::Error;

/// Why a script line could not be mapped into the parse output.
///
/// The public lookup functions swallow these and return `None`; the variants
/// exist so callers and logs can tell the cases apart.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The output text is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The output has no `sentenceList` field.
    #[error("no sentenceList field in output")]
    MissingSentenceList,

    /// `sentenceList` exists but is not an array.
    #[error("sentenceList is not an array")]
    NotAnArray,

    /// Script lines are 1-based; zero was requested.
    #[error("line number must be at least 1, got {0}")]
    LineOutOfRange(usize),

    /// Fewer sentences than the requested line carry a `commandRaw` marker.
    #[error("no sentence for line {line}: only {found} commandRaw markers present")]
    MarkerNotFound {
        /// The requested 1-based script line.
        line: usize,
        /// How many markers the output contains.
        found: usize,
    },
}

/// A specialized Result type for scene-locate operations.
pub type Result<T> = std::result::Result<T, LocateError>;
