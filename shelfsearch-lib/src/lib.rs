//! ShelfSearch - semantic retrieval for a library catalog
//!
//! # Architecture
//!
//! ```text
//! Book + Reviews -> Content -> Embedder -> Index
//!                                            |
//! Query -> Embedder -> Search <--------------+
//!                         |
//!                      Results
//! ```
//!
//! # Example
//!
//! ```ignore
//! use shelfsearch_lib::{
//!     catalog::MemoryCatalog, embed::MiniLmEmbedder, search::CatalogSearch,
//!     store::MemoryIndex,
//! };
//!
//! let catalog = MemoryCatalog::from_records(books, reviews);
//! let embedder = MiniLmEmbedder::new();
//! let index = MemoryIndex::new(embedder.dimension());
//!
//! let engine = CatalogSearch::new(catalog, embedder, index);
//!
//! // Index a book
//! engine.index_book(42)?;
//!
//! // Search
//! let results = engine.search("melancholy coming-of-age novel", 5)?;
//! ```

pub mod catalog;
pub mod content;
pub mod embed;
pub mod error;
pub mod search;
pub mod store;

pub use error::{Error, Result};
