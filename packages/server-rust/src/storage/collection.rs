//! Generic insertion-ordered keyed collection.
//!
//! The storage primitive under [`PortalStore`](super::PortalStore): a map
//! from identity to record that preserves insertion order for iteration.
//! Order carries no meaning beyond default display order, but derived views
//! rely on it for tie stability, so `list()` must be deterministic.

use std::collections::HashMap;

use parking_lot::RwLock;

/// A record that knows its own identity.
///
/// The seam between the generic collection and the entity types. `KIND` is
/// the lowercase entity name used in logs and not-found responses.
pub trait Keyed: Clone + Send + Sync + 'static {
    /// Lowercase entity-kind name, e.g. `"assessment"`.
    const KIND: &'static str;

    /// The record's unique identity.
    fn id(&self) -> &str;
}

/// Interior state: the id-to-record map plus the insertion order of ids.
///
/// Both are updated together under one lock, so `order` always contains
/// exactly the keys of `records`.
struct Inner<T> {
    records: HashMap<String, T>,
    order: Vec<String>,
}

/// An insertion-ordered collection of records of one entity kind.
///
/// All access goes through a [`RwLock`]; reads return cloned snapshots so
/// callers never hold the lock across their own logic. Identities are never
/// reassigned and records are never deleted.
pub struct Collection<T: Keyed> {
    inner: RwLock<Inner<T>>,
}

impl<T: Keyed> Collection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Returns the record with the given identity, or `None` if unknown.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<T> {
        self.inner.read().records.get(id).cloned()
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    /// Returns the first record matching `predicate`, scanning in insertion
    /// order.
    #[must_use]
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id))
            .find(|record| predicate(record))
            .cloned()
    }

    /// Stores `record` keyed by its own identity and returns it.
    ///
    /// Replacing an existing identity keeps the original insertion position.
    pub fn insert(&self, record: T) -> T {
        let mut inner = self.inner.write();
        let id = record.id().to_string();
        if inner.records.insert(id.clone(), record.clone()).is_none() {
            inner.order.push(id);
        }
        record
    }

    /// Applies `mutate` to the record with the given identity in place.
    ///
    /// Returns the mutated snapshot, or `None` (without inserting anything)
    /// if the identity is unknown.
    pub fn update_with(&self, id: &str, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let mut inner = self.inner.write();
        let record = inner.records.get_mut(id)?;
        mutate(record);
        Some(record.clone())
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

impl<T: Keyed> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    impl Keyed for Note {
        const KIND: &'static str = "note";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn insert_then_get_round_trips() {
        let notes = Collection::new();
        let stored = notes.insert(note("n1", "hello"));

        assert_eq!(notes.get("n1"), Some(stored));
        assert!(notes.get("n2").is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let notes = Collection::new();
        notes.insert(note("b", "second"));
        notes.insert(note("a", "first"));
        notes.insert(note("c", "third"));

        let ids: Vec<String> = notes.list().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn reinsert_keeps_original_position() {
        let notes = Collection::new();
        notes.insert(note("a", "one"));
        notes.insert(note("b", "two"));
        notes.insert(note("a", "one, revised"));

        let listed = notes.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "one, revised");
        assert_eq!(listed[1].id, "b");
    }

    #[test]
    fn update_with_mutates_in_place() {
        let notes = Collection::new();
        notes.insert(note("a", "draft"));

        let updated = notes.update_with("a", |n| n.text = "final".to_string());
        assert_eq!(updated.map(|n| n.text), Some("final".to_string()));
        assert_eq!(notes.get("a").map(|n| n.text), Some("final".to_string()));
    }

    #[test]
    fn update_with_unknown_id_inserts_nothing() {
        let notes: Collection<Note> = Collection::new();
        assert!(notes.update_with("ghost", |_| {}).is_none());
        assert!(notes.is_empty());
    }

    #[test]
    fn find_scans_in_insertion_order() {
        let notes = Collection::new();
        notes.insert(note("a", "dup"));
        notes.insert(note("b", "dup"));

        let hit = notes.find(|n| n.text == "dup");
        assert_eq!(hit.map(|n| n.id), Some("a".to_string()));
        assert!(notes.find(|n| n.text == "missing").is_none());
    }

    #[test]
    fn len_and_is_empty() {
        let notes = Collection::new();
        assert!(notes.is_empty());

        notes.insert(note("a", "one"));
        notes.insert(note("b", "two"));
        assert_eq!(notes.len(), 2);
        assert!(!notes.is_empty());
    }
}
