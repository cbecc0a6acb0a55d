//! High-level indexing and search interface
//!
//! Combines catalog, embedder, and index store into a unified API: the
//! write path turns a catalog book into an index entry, the read path
//! ranks all entries against a free-text query by cosine similarity.
//!
//! # Usage
//!
//! ```ignore
//! use shelfsearch_lib::search::CatalogSearch;
//!
//! let engine = CatalogSearch::new(catalog, embedder, index);
//!
//! engine.index_book(42)?;
//! let results = engine.search("melancholy coming-of-age novel", 5)?;
//! for result in results {
//!     println!("{}: {:.4}", result.metadata.title, result.score);
//! }
//! ```

use tracing::warn;

use crate::catalog::Catalog;
use crate::content::build_content;
use crate::embed::Embedder;
use crate::store::{EntryMetadata, IndexEntry, IndexStore};
use crate::{Error, Result};

/// Default number of results returned by a search.
pub const DEFAULT_TOP_K: usize = 5;

/// A ranked match from the index.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Identifier of the matched book
    pub book_id: i64,
    /// Cosine similarity to the query, in [-1, 1]
    pub score: f32,
    /// Identifier and display title
    pub metadata: EntryMetadata,
    /// Canonical content the match was scored against
    pub content: String,
}

/// Outcome of an indexing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    /// The book was embedded and written to the index
    Indexed,
    /// The book no longer exists in the catalog; nothing was written.
    /// Indexing is allowed to race with upstream deletion.
    SkippedMissing,
}

/// Search engine combining catalog lookups, embedding, and index storage.
///
/// Owns its three collaborators; construct one at the composition root and
/// share it behind an `Arc` if multiple tasks need it. All operations take
/// `&self` - the collaborators do their own locking.
pub struct CatalogSearch<C: Catalog, E: Embedder, S: IndexStore> {
    catalog: C,
    embedder: E,
    index: S,
}

impl<C: Catalog, E: Embedder, S: IndexStore> CatalogSearch<C, E, S> {
    /// Create a new search engine.
    #[must_use]
    pub fn new(catalog: C, embedder: E, index: S) -> Self {
        Self {
            catalog,
            embedder,
            index,
        }
    }

    /// Index one book: fetch it and its reviews from the catalog, build the
    /// canonical content, embed it, and write the entry.
    ///
    /// A book missing from the catalog is not an error: the attempt is
    /// reported as [`IndexOutcome::SkippedMissing`] and the index is left
    /// untouched. Re-indexing an already-indexed book overwrites its entry.
    pub fn index_book(&self, book_id: i64) -> Result<IndexOutcome> {
        let Some(book) = self.catalog.book(book_id)? else {
            return Ok(IndexOutcome::SkippedMissing);
        };

        let reviews = self.catalog.reviews(book_id)?;
        let content = build_content(&book, &reviews);
        let embedding = self.embedder.embed(&content)?;

        self.index.put(
            book_id,
            IndexEntry {
                embedding,
                content,
                metadata: EntryMetadata {
                    book_id,
                    title: book.title,
                },
            },
        )?;

        Ok(IndexOutcome::Indexed)
    }

    /// Evict a book from the index after it was deleted upstream.
    ///
    /// Returns whether an entry was present.
    pub fn remove_book(&self, book_id: i64) -> bool {
        self.index.remove(book_id)
    }

    /// Search the index for books similar to a free-text query.
    ///
    /// Embeds the query once and scores every indexed entry by cosine
    /// similarity, returning the `top_k` best matches sorted by descending
    /// score. Ties keep snapshot order, so results are deterministic for an
    /// unchanged index. An empty index returns no results without invoking
    /// the embedder. Entries whose dimensionality disagrees with the query
    /// vector are skipped with a warning rather than failing the search.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `top_k` is zero, and
    /// [`Error::Embedding`] if the query cannot be embedded.
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        if top_k == 0 {
            return Err(Error::InvalidInput("top_k must be positive".to_string()));
        }

        if self.index.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query)?;

        let mut results = Vec::new();
        for (book_id, entry) in self.index.snapshot() {
            if entry.embedding.len() != query_embedding.len() {
                warn!(
                    book_id,
                    expected = query_embedding.len(),
                    actual = entry.embedding.len(),
                    "skipping entry with mismatched embedding dimension"
                );
                continue;
            }

            results.push(SearchResult {
                book_id,
                score: cosine_similarity(&query_embedding, &entry.embedding),
                metadata: entry.metadata,
                content: entry.content,
            });
        }

        // Stable sort: equal scores keep snapshot order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        Ok(results)
    }

    /// Returns the number of indexed books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no books are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns a reference to the embedder.
    #[must_use]
    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Returns a reference to the index store.
    #[must_use]
    pub fn index(&self) -> &S {
        &self.index
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns a value in [-1, 1] where 1 means identical direction, or 0.0
/// when either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same length");

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
