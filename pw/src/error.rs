//! Traversal error types

use thiserror::Error;

/// Errors raised by a [`TraversalSource`](crate::TraversalSource)
#[derive(Debug, Error)]
pub enum WalkError {
    /// Stepped past the last element; terminal for the source
    #[error("Traversal exhausted")]
    Exhausted,

    #[error("Subscriber '{name}' is not attached")]
    NotFound { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
