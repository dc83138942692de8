//! Context error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("No algorithms configured; at least one is required")]
    NoAlgorithms,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
