//! In-memory entity stores.
//!
//! Each entity type gets its own [`EntityStore`]: an append-only `Vec` plus an
//! [`IdAllocator`] that stamps records with sequential IDs as they arrive.
//! Stores do no locking; wrap them in a lock to share across tasks.

use crate::types::IdAllocator;

/// A record type that can live in an [`EntityStore`].
pub trait Entity {
    /// The record's ID type.
    type Id: Copy + Eq + From<u64>;
    /// The record without its ID, as supplied by callers.
    type New;

    /// Build the stored record from an assigned ID and the caller's data.
    fn from_new(id: Self::Id, new: Self::New) -> Self;

    /// The record's ID.
    fn id(&self) -> Self::Id;
}

/// Insertion-ordered collection of one entity type.
#[derive(Debug, Clone)]
pub struct EntityStore<E> {
    records: Vec<E>,
    ids: IdAllocator,
}

impl<E: Entity> EntityStore<E> {
    /// Create an empty store whose first ID will be 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Create a store pre-populated with `items`.
    #[must_use]
    pub fn with_records(items: impl IntoIterator<Item = E::New>) -> Self {
        let mut store = Self::new();
        store.add_all(items);
        store
    }

    /// Append `items` in order, assigning each the next sequential ID.
    ///
    /// Returns the newly stored records.
    pub fn add_all(&mut self, items: impl IntoIterator<Item = E::New>) -> &[E] {
        let start = self.records.len();
        for item in items {
            let id = E::Id::from(self.ids.allocate());
            self.records.push(E::from_new(id, item));
        }
        self.records.get(start..).unwrap_or_default()
    }

    /// Append a single record and return it with its assigned ID.
    #[allow(clippy::indexing_slicing)] // non-empty: just pushed
    pub fn add_one(&mut self, item: E::New) -> &E {
        let id = E::Id::from(self.ids.allocate());
        self.records.push(E::from_new(id, item));
        &self.records[self.records.len() - 1]
    }

    /// All records in insertion order.
    #[must_use]
    pub const fn all(&self) -> &[E] {
        self.records.as_slice()
    }

    /// The first record with the given ID.
    #[must_use]
    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Number of stored records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record. The ID counter is left alone; see [`Self::reset_ids`].
    #[cfg(any(test, feature = "test-support"))]
    pub fn remove_all(&mut self) {
        self.records.clear();
    }

    /// Rewind the ID counter so the next record gets ID 1.
    ///
    /// Existing records keep their IDs, so calling this without
    /// [`Self::remove_all`] can produce duplicates.
    #[cfg(any(test, feature = "test-support"))]
    pub const fn reset_ids(&mut self) {
        self.ids.reset();
    }
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
