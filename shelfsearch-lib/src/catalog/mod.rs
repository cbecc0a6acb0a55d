//! Catalog records and the lookup seam to the backing store
//!
//! The relational store (and its ORM) is an external collaborator; this
//! module defines the plain records it supplies and the two lookup
//! capabilities the retrieval core consumes from it.
//!
//! # Implementing a Catalog
//!
//! ```ignore
//! use shelfsearch_lib::catalog::{Book, Catalog, Review};
//!
//! struct SqlCatalog { /* ... */ }
//!
//! impl Catalog for SqlCatalog {
//!     fn book(&self, id: i64) -> shelfsearch_lib::Result<Option<Book>> {
//!         // Fetch the row, resolve author/genre display names
//!         todo!()
//!     }
//!
//!     fn reviews(&self, book_id: i64) -> shelfsearch_lib::Result<Vec<Review>> {
//!         todo!()
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;

/// A catalog book as supplied by the backing store.
///
/// `author` and `genre` hold display names already resolved by the store;
/// the retrieval core never sees foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier (the store's primary key)
    pub id: i64,
    /// Book title
    pub title: String,
    /// Author display name, if the store resolved one
    pub author: Option<String>,
    /// Genre display name, if the store resolved one
    pub genre: Option<String>,
    /// Year of publication
    pub year_published: Option<i32>,
    /// Free-text summary
    pub summary: Option<String>,
}

/// A reader review attached to a book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Identifier of the reviewed book
    pub book_id: i64,
    /// Review body
    pub text: String,
    /// Star rating, if the reviewer left one
    pub rating: Option<f32>,
}

/// Lookup capabilities consumed from the external storage collaborator
pub trait Catalog: Send + Sync {
    /// Fetch a book by identifier
    ///
    /// Returns `Ok(None)` when no book with this identifier exists; only
    /// store-level failures are errors.
    fn book(&self, id: i64) -> Result<Option<Book>>;

    /// Fetch a book's reviews, in store order
    fn reviews(&self, book_id: i64) -> Result<Vec<Review>>;
}

mod memory;

pub use memory::*;
