//! Text embedding using local models
//!
//! Uses sentence-transformers/all-MiniLM-L6-v2 via the fastembed crate
//! (ONNX runtime), the same model the catalog backend indexes with.
//!
//! # Model Details
//!
//! - Dimensions: 384
//! - Max tokens: 256
//!
//! # Usage
//!
//! ```ignore
//! use shelfsearch_lib::embed::{Embedder, MiniLmEmbedder};
//!
//! let embedder = MiniLmEmbedder::new();
//!
//! // First call loads the model; later calls reuse it
//! let vector = embedder.embed("Title: Dune Author: Frank Herbert Genre: Sci-Fi")?;
//! assert_eq!(vector.len(), embedder.dimension());
//! ```

use crate::Result;

/// A vector embedding - fixed size array of floats
pub type Embedding = Vec<f32>;

/// Trait for text embedding models
pub trait Embedder: Send + Sync {
    /// Embed a single piece of text
    ///
    /// Deterministic for a fixed model: the same text always yields the
    /// same vector. Empty input is permitted.
    fn embed(&self, text: &str) -> Result<Embedding>;

    /// Returns the embedding dimension
    fn dimension(&self) -> usize;

    /// Returns the model name/identifier
    fn model_name(&self) -> &str;
}

mod minilm;

pub use minilm::*;
