use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use parking_lot::Mutex;
use tracing::debug;

use crate::embed::{Embedder, Embedding};
use crate::{Error, Result};

/// Dimensionality of all-MiniLM-L6-v2 output.
pub const MINILM_DIMENSION: usize = 384;

/// MiniLM embedder using sentence-transformers/all-MiniLM-L6-v2.
///
/// Uses fastembed for ONNX-based inference. Construction is cheap: the
/// model is loaded on the first embed call (downloading ~90MB on first
/// ever use) and kept for the lifetime of the instance. The load happens
/// under a mutex, so concurrent first calls trigger exactly one load.
pub struct MiniLmEmbedder {
    model: Mutex<Option<TextEmbedding>>,
}

impl MiniLmEmbedder {
    /// Create a new MiniLM embedder without loading the model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: Mutex::new(None),
        }
    }

    /// Load the model now instead of on the first embed call.
    ///
    /// Useful to pay the load latency at startup rather than on the first
    /// request.
    pub fn preload(&self) -> Result<()> {
        self.with_model(|_| Ok(()))
    }

    fn with_model<T>(&self, f: impl FnOnce(&mut TextEmbedding) -> Result<T>) -> Result<T> {
        let mut slot = self.model.lock();

        if slot.is_none() {
            debug!(model = self.model_name(), "loading embedding model");
            let opts = InitOptions::new(EmbeddingModel::AllMiniLML6V2)
                .with_show_download_progress(false);

            let model = TextEmbedding::try_new(opts).map_err(|e| Error::Embedding(e.to_string()))?;
            *slot = Some(model);
        }

        f(slot.as_mut().expect("model was just loaded"))
    }
}

impl Default for MiniLmEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for MiniLmEmbedder {
    fn model_name(&self) -> &str {
        "sentence-transformers/all-MiniLM-L6-v2"
    }

    fn dimension(&self) -> usize {
        MINILM_DIMENSION
    }

    fn embed(&self, text: &str) -> Result<Embedding> {
        self.with_model(|model| {
            model
                .embed(vec![text], None)
                .map_err(|e| Error::Embedding(e.to_string()))?
                .into_iter()
                .next()
                .ok_or_else(|| Error::Embedding("model returned no embeddings".to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires model download, run with: cargo test -- --ignored
    fn test_embed_has_declared_dimension() {
        let embedder = MiniLmEmbedder::new();
        let vector = embedder.embed("Title: Dune Author: Frank Herbert Genre: Sci-Fi").unwrap();
        assert_eq!(vector.len(), embedder.dimension());
    }

    #[test]
    #[ignore] // Requires model download
    fn test_embed_is_deterministic() {
        let embedder = MiniLmEmbedder::new();
        let first = embedder.embed("the left hand of darkness").unwrap();
        let second = embedder.embed("the left hand of darkness").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[ignore] // Requires model download
    fn test_embed_empty_string_does_not_fail() {
        let embedder = MiniLmEmbedder::new();
        let vector = embedder.embed("").unwrap();
        assert_eq!(vector.len(), MINILM_DIMENSION);
    }
}
