use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::store::{IndexEntry, IndexStore};
use crate::{Error, Result};

/// In-memory index for development and testing.
///
/// A single writer mutates the map at a time while readers scan a cloned
/// snapshot. Suitable for small catalogs (< 10k books); for production,
/// swap in a proper vector database behind [`IndexStore`]. Contents are
/// process-local and lost on restart.
pub struct MemoryIndex {
    dimension: usize,
    entries: RwLock<BTreeMap<i64, IndexEntry>>,
}

impl MemoryIndex {
    /// Create an empty index expecting vectors of the given dimensionality.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl IndexStore for MemoryIndex {
    fn put(&self, id: i64, entry: IndexEntry) -> Result<()> {
        if entry.embedding.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: entry.embedding.len(),
            });
        }

        self.entries.write().insert(id, entry);
        Ok(())
    }

    fn remove(&self, id: i64) -> bool {
        self.entries.write().remove(&id).is_some()
    }

    fn snapshot(&self) -> Vec<(i64, IndexEntry)> {
        self.entries
            .read()
            .iter()
            .map(|(id, entry)| (*id, entry.clone()))
            .collect()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntryMetadata;

    fn make_entry(book_id: i64, content: &str, embedding: Vec<f32>) -> IndexEntry {
        IndexEntry {
            embedding,
            content: content.to_string(),
            metadata: EntryMetadata {
                book_id,
                title: format!("book {book_id}"),
            },
        }
    }

    #[test]
    fn test_put_and_len() {
        let index = MemoryIndex::new(2);
        assert_eq!(index.len(), 0);
        assert!(index.is_empty());

        index.put(1, make_entry(1, "a", vec![1.0, 0.0])).unwrap();
        index.put(2, make_entry(2, "b", vec![0.0, 1.0])).unwrap();

        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let index = MemoryIndex::new(2);

        index.put(1, make_entry(1, "first", vec![1.0, 0.0])).unwrap();
        index.put(1, make_entry(1, "second", vec![0.0, 1.0])).unwrap();

        assert_eq!(index.len(), 1);
        let snapshot = index.snapshot();
        assert_eq!(snapshot[0].1.content, "second");
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let index = MemoryIndex::new(3);

        let err = index.put(1, make_entry(1, "a", vec![1.0, 0.0])).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch { expected: 3, actual: 2 }
        ));
        assert!(index.is_empty());
    }

    #[test]
    fn test_remove() {
        let index = MemoryIndex::new(1);
        index.put(1, make_entry(1, "a", vec![1.0])).unwrap();

        assert!(index.remove(1));
        assert!(index.is_empty());
        assert!(!index.remove(1));
    }

    #[test]
    fn test_snapshot_is_ordered_by_id() {
        let index = MemoryIndex::new(1);
        index.put(3, make_entry(3, "c", vec![1.0])).unwrap();
        index.put(1, make_entry(1, "a", vec![1.0])).unwrap();
        index.put(2, make_entry(2, "b", vec![1.0])).unwrap();

        let ids: Vec<i64> = index.snapshot().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let index = MemoryIndex::new(1);
        index.put(1, make_entry(1, "a", vec![1.0])).unwrap();

        let snapshot = index.snapshot();
        index.clear();

        // The snapshot is unaffected by later mutation
        assert_eq!(snapshot.len(), 1);
        assert!(index.is_empty());
    }

    #[test]
    fn test_clear() {
        let index = MemoryIndex::new(1);
        index.put(1, make_entry(1, "a", vec![1.0])).unwrap();
        index.put(2, make_entry(2, "b", vec![1.0])).unwrap();

        index.clear();
        assert_eq!(index.len(), 0);
    }
}
