//! Error types for loading and saving syntax trees
//!
//! Lowering itself never fails; only the edges that touch the outside world
//! (files, serialized trees) return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a serialized tree
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The tree is not valid JSON or does not match the node schema
    #[error("Malformed syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree file could not be read or written
    #[error("Cannot access '{}': {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
