//! Error types for token builds.
//!
//! Everything in here is fatal: a build that hits one of these stops before
//! any output file is touched. Unresolvable references are not errors; they
//! are reported through [`UnresolvedReference`](crate::UnresolvedReference).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a token build.
#[derive(Debug, Error)]
pub enum TokenError {
    /// An input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An input document parsed but has the wrong shape.
    #[error("invalid document {}: {message}", path.display())]
    InvalidDocument { path: PathBuf, message: String },

    /// The build configuration file could not be loaded.
    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The stylesheet template failed to render.
    #[error("failed to render stylesheet: {0}")]
    Render(#[from] minijinja::Error),

    /// The resolved document failed to serialize.
    #[error("failed to serialize resolved document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
