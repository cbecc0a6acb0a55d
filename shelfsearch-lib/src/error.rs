//! Error types for ShelfSearch

use thiserror::Error;

/// Result type alias for ShelfSearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ShelfSearch operations
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load or run the embedding model
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Failed to read from the backing catalog
    #[error("catalog error: {0}")]
    Catalog(String),

    /// A vector's dimensionality disagrees with the index
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality the index was created with
        expected: usize,
        /// Dimensionality of the offending vector
        actual: usize,
    },

    /// Invalid input provided
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
