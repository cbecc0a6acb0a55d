//! Index storage backends
//!
//! Start with in-memory storage for development, then migrate to a proper
//! vector database.
//!
//! # Storage Model
//!
//! Each stored entry consists of:
//! - Embedding: the vector representation of a book's canonical content
//! - Content: the canonical text the vector was computed from
//! - Metadata: identifier and display title
//!
//! Entries are keyed by book identifier. A store is created with a fixed
//! vector dimensionality and rejects writes that disagree with it; a
//! mismatch means the entry was embedded with a different model version.
//!
//! # Usage
//!
//! ```ignore
//! use shelfsearch_lib::store::{IndexStore, MemoryIndex};
//!
//! let index = MemoryIndex::new(384);
//!
//! index.put(book_id, entry)?;
//!
//! for (id, entry) in index.snapshot() {
//!     // scan for scoring
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::embed::Embedding;
use crate::Result;

/// Metadata carried alongside each indexed book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryMetadata {
    /// Book identifier
    pub book_id: i64,
    /// Display title
    pub title: String,
}

/// One indexed book: its embedding, canonical content, and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexEntry {
    /// Vector representation of `content`
    pub embedding: Embedding,
    /// Canonical text the embedding was computed from
    pub content: String,
    /// Identifier and display title
    pub metadata: EntryMetadata,
}

/// Trait for index storage backends
///
/// Implementations must serialize writes and allow concurrent reads
/// against a stable snapshot.
pub trait IndexStore: Send + Sync {
    /// Insert or overwrite the entry for `id`. Last write wins.
    ///
    /// # Errors
    /// Returns [`crate::Error::DimensionMismatch`] if the entry's embedding
    /// length differs from [`dimension`](Self::dimension).
    fn put(&self, id: i64, entry: IndexEntry) -> Result<()>;

    /// Remove the entry for `id`, returning whether it was present.
    ///
    /// Lets identifiers deleted upstream be evicted instead of lingering
    /// as stale matches.
    fn remove(&self, id: i64) -> bool;

    /// Snapshot of all entries for scanning.
    ///
    /// The order is deterministic for an unchanged store but otherwise
    /// unspecified; callers must not rely on it.
    fn snapshot(&self) -> Vec<(i64, IndexEntry)>;

    /// Expected dimensionality of stored vectors
    fn dimension(&self) -> usize;

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Check if store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored entries
    fn clear(&self);
}

mod memory;

pub use memory::*;
