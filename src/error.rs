//! Error types for loading dictionaries and solving ladders

use std::io;
use thiserror::Error;

/// Errors returned by word sources, strategies and the resolver
///
/// "No chain exists" is not an error: strategies return an empty list.
#[derive(Debug, Error)]
pub enum LadderError {
    /// Start and goal words have different lengths
    #[error("word length does not match: {from:?} has {from_len} characters, {to:?} has {to_len}")]
    LengthMismatch {
        from: String,
        to: String,
        from_len: usize,
        to_len: usize,
    },

    /// An endpoint is absent from the loaded dictionary
    #[error("{0:?} is not in the dictionary")]
    WordNotFound(String),

    /// The word source failed; the underlying error is passed through as-is
    #[error(transparent)]
    Source(#[from] io::Error),
}

/// Result alias for ladder operations
pub type Result<T> = std::result::Result<T, LadderError>;
