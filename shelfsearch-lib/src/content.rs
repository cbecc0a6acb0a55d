//! Canonical content assembly
//!
//! Builds the deterministic text representation of a book that gets handed
//! to the embedder. The same assembly must be used at indexing time for
//! every book so query vectors land in a comparable space.

use crate::catalog::{Book, Review};

/// Number of review excerpts folded into the canonical content.
pub const MAX_REVIEW_EXCERPTS: usize = 3;

/// Build the canonical text for a book.
///
/// Assembly order: `Title:`, `Author:`, `Genre:` (always, with the empty
/// string substituted for a missing author or genre), then `Summary:` only
/// if non-empty, then `Reviews:` with the first three non-empty review
/// texts space-joined, only if at least one exists. Parts are joined with
/// a single space.
#[must_use]
pub fn build_content(book: &Book, reviews: &[Review]) -> String {
    let mut parts = vec![
        format!("Title: {}", book.title),
        format!("Author: {}", book.author.as_deref().unwrap_or("")),
        format!("Genre: {}", book.genre.as_deref().unwrap_or("")),
    ];

    if let Some(summary) = book.summary.as_deref() {
        if !summary.is_empty() {
            parts.push(format!("Summary: {summary}"));
        }
    }

    let excerpts: Vec<&str> = reviews
        .iter()
        .map(|r| r.text.as_str())
        .filter(|t| !t.is_empty())
        .take(MAX_REVIEW_EXCERPTS)
        .collect();

    if !excerpts.is_empty() {
        parts.push(format!("Reviews: {}", excerpts.join(" ")));
    }

    parts.join(" ")
}
