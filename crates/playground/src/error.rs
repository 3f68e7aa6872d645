//! Error types for playground operations.

use std::io;
use thiserror::Error;

/// The error type for playground operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested parser version is not available.
    #[error("Unknown parser version: {0}")]
    UnknownVersion(String),

    /// The provider offers no parser versions at all.
    #[error("No parser versions available")]
    NoVersions,
}

/// A specialized Result type for playground operations.
pub type Result<T> = std::result::Result<T, Error>;
