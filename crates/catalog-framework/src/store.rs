//! # Ordered Record Store
//!
//! This module defines the `RecordStore`, an immutable collection of records that keeps
//! source insertion order for iteration and an id index for lookups.

use crate::entity::CatalogRecord;
use std::collections::HashMap;
use tracing::{debug, warn};

/// An immutable, ordered collection of records of one type.
///
/// # Architecture Note
/// The store is built once from the loaded dataset and never mutated afterwards, so it
/// can be shared freely by reference.
///
/// * **Ordering** – iteration yields records in the order they were supplied. This order
///   is the render order.
/// * **Lookup** – [`get`](Self::get) resolves an id through a `HashMap` index. When the
///   source contains the same id more than once, the first record in order wins.
/// * **No validation** – duplicate ids are reported through `tracing` but never rejected.
///
/// ```rust
/// use catalog_framework::{CatalogRecord, RecordStore};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32, label: &'static str }
///
/// impl CatalogRecord for Tag {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
/// }
///
/// let store = RecordStore::new(vec![
///     Tag { id: 1, label: "first" },
///     Tag { id: 1, label: "shadowed" },
/// ]);
/// assert_eq!(store.get(1).map(|t| t.label), Some("first"));
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore<T: CatalogRecord> {
    records: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: CatalogRecord> RecordStore<T> {
    /// Builds a store from records in source order.
    pub fn new(records: Vec<T>) -> Self {
        // Extract just the type name (e.g., "User" instead of "catalog_browser::model::user::User")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let id = record.id();
            if index.contains_key(&id) {
                warn!(record_type, %id, position, "Duplicate id, first occurrence wins");
                continue;
            }
            index.insert(id, position);
        }

        debug!(record_type, size = records.len(), "Store built");
        Self { records, index }
    }

    /// Looks up a record by id, returning the first record in source order with that id.
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids that appear more than once, in order of their second appearance.
    pub fn duplicate_ids(&self) -> Vec<T::Id> {
        self.records
            .iter()
            .enumerate()
            .filter(|(position, record)| self.index.get(&record.id()) != Some(position))
            .map(|(_, record)| record.id())
            .collect()
    }
}

impl<T: CatalogRecord> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: CatalogRecord> From<Vec<T>> for RecordStore<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<'a, T: CatalogRecord> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    impl CatalogRecord for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn item(id: u32, name: &'static str) -> Item {
        Item { id, name }
    }

    #[test]
    fn test_iteration_keeps_source_order() {
        let store = RecordStore::new(vec![item(3, "c"), item(1, "a"), item(2, "b")]);
        let names: Vec<_> = store.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_get_returns_first_match_on_duplicates() {
        let store = RecordStore::new(vec![item(1, "first"), item(2, "other"), item(1, "second")]);
        assert_eq!(store.get(1).unwrap().name, "first");
        assert_eq!(store.len(), 3);
        assert_eq!(store.duplicate_ids(), vec![1]);
    }

    #[test]
    fn test_missing_id() {
        let store = RecordStore::new(vec![item(1, "a")]);
        assert!(store.get(99).is_none());
        assert!(!store.contains(99));
        assert!(store.contains(1));
    }

    #[test]
    fn test_empty_store() {
        let store: RecordStore<Item> = RecordStore::default();
        assert!(store.is_empty());
        assert!(store.duplicate_ids().is_empty());
    }
}
