//! # List Synchronizer
//!
//! A [`Synchronizer`] owns the in-memory copy of one collection for the length
//! of a session. The collection lives in the store as a single array-valued
//! field of a single document, so the only write primitive is "replace the
//! whole array".
//!
//! ```text
//! Idle ──load──► Loading ──ok──► Ready ──mutation──► Committing ──ok──► Ready
//!                   │                                     │
//!                   └──────────────err──► Failed ◄──err───┘
//! ```
//!
//! `Failed` only accepts `load`. Mutations in any other state than `Ready` are
//! rejected with [`PharmacyError::NotReady`].
//!
//! ## Overwrite semantics
//!
//! Every mutation builds the next sequence, installs it as the working copy,
//! then writes it with one `overwrite_field` call. If that call fails, the
//! working copy keeps the new sequence and the durable copy keeps the old one
//! until the next successful load. Concurrent sessions are not coordinated:
//! whichever commits last replaces the other's changes.

use crate::error::{PharmacyError, Result};
use crate::store::DocumentStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Where a collection lives in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub document: &'static str,
    pub field: &'static str,
}

pub const INVENTORY: Collection = Collection {
    document: "pharmacy-inventory",
    field: "medicines",
};

pub const SALES: Collection = Collection {
    document: "pharmacy-sales",
    field: "orders",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Loading,
    Ready,
    Committing,
    Failed,
}

impl std::fmt::Display for SyncState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SyncState::Idle => "idle",
            SyncState::Loading => "loading",
            SyncState::Ready => "ready",
            SyncState::Committing => "committing",
            SyncState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct Synchronizer<T> {
    collection: Collection,
    items: Vec<T>,
    state: SyncState,
}

impl<T> Synchronizer<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            items: Vec::new(),
            state: SyncState::Idle,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Fetches the backing document and replaces the working copy.
    ///
    /// An absent document, or a document without the field, loads as empty.
    pub fn load<S: DocumentStore>(&mut self, store: &S) -> Result<&[T]> {
        self.state = SyncState::Loading;
        match self.fetch(store) {
            Ok(items) => {
                tracing::debug!(
                    document = self.collection.document,
                    count = items.len(),
                    "collection loaded"
                );
                self.items = items;
                self.state = SyncState::Ready;
                Ok(&self.items)
            }
            Err(err) => {
                tracing::warn!(document = self.collection.document, error = %err, "load failed");
                self.state = SyncState::Failed;
                Err(err)
            }
        }
    }

    fn fetch<S: DocumentStore>(&self, store: &S) -> Result<Vec<T>> {
        let document = match store.fetch_document(self.collection.document)? {
            Some(document) => document,
            None => return Ok(Vec::new()),
        };
        match document.get(self.collection.field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value.clone())?),
        }
    }

    /// Replaces the whole stored sequence with `next`.
    ///
    /// The working copy is replaced before the write is issued. On failure the
    /// state becomes `Failed` and the working copy is not rolled back.
    pub fn commit<S: DocumentStore>(&mut self, store: &mut S, next: Vec<T>) -> Result<()> {
        self.ensure_ready()?;
        let value = serde_json::to_value(&next)?;

        self.state = SyncState::Committing;
        let count = next.len();
        self.items = next;

        match store.overwrite_field(self.collection.document, self.collection.field, value) {
            Ok(()) => {
                tracing::debug!(
                    document = self.collection.document,
                    count,
                    "collection committed"
                );
                self.state = SyncState::Ready;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(document = self.collection.document, error = %err, "commit failed");
                self.state = SyncState::Failed;
                Err(err.into())
            }
        }
    }

    /// Appends `item` to the end of the sequence.
    pub fn add<S: DocumentStore>(&mut self, store: &mut S, item: T) -> Result<()> {
        self.ensure_ready()?;
        let mut next = self.items.clone();
        next.push(item);
        self.commit(store, next)
    }

    /// Replaces the element at `position` in place.
    pub fn update<S: DocumentStore>(
        &mut self,
        store: &mut S,
        position: usize,
        item: T,
    ) -> Result<()> {
        self.ensure_ready()?;
        self.check_position(position)?;
        let mut next = self.items.clone();
        next[position] = item;
        self.commit(store, next)
    }

    /// Removes the element at `position`, shifting later elements down.
    pub fn delete<S: DocumentStore>(&mut self, store: &mut S, position: usize) -> Result<T> {
        self.ensure_ready()?;
        self.check_position(position)?;
        let mut next = self.items.clone();
        let removed = next.remove(position);
        self.commit(store, next)?;
        Ok(removed)
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            SyncState::Ready => Ok(()),
            other => Err(PharmacyError::NotReady(other)),
        }
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.items.len() {
            return Err(PharmacyError::PositionOutOfRange {
                position,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Medicine;
    use crate::store::memory::fixtures::{medicine, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn loaded(store: &InMemoryStore) -> Synchronizer<Medicine> {
        let mut sync = Synchronizer::new(INVENTORY);
        sync.load(store).unwrap();
        sync
    }

    fn committed(store: &InMemoryStore) -> Vec<Medicine> {
        let last = store.writes().last().unwrap();
        serde_json::from_value(last.value.clone()).unwrap()
    }

    fn abc() -> Vec<Medicine> {
        vec![
            medicine("Aspirin", "A1", "10"),
            medicine("Bextra", "B1", "5"),
            medicine("Codeine", "C1", "2"),
        ]
    }

    #[test]
    fn missing_document_loads_empty() {
        let store = InMemoryStore::new();
        let sync = loaded(&store);
        assert!(sync.items().is_empty());
        assert_eq!(sync.state(), SyncState::Ready);
    }

    #[test]
    fn document_without_field_loads_empty() {
        let mut store = InMemoryStore::new();
        store.insert_document(INVENTORY.document, Default::default());
        let sync = loaded(&store);
        assert!(sync.items().is_empty());
    }

    #[test]
    fn load_failure_moves_to_failed() {
        let mut store = InMemoryStore::new();
        store.set_offline(true);
        let mut sync: Synchronizer<Medicine> = Synchronizer::new(INVENTORY);
        let err = sync.load(&store).unwrap_err();
        assert!(matches!(err, PharmacyError::StoreUnavailable(_)));
        assert_eq!(sync.state(), SyncState::Failed);
    }

    #[test]
    fn mutations_require_load() {
        let mut store = InMemoryStore::new();
        let mut sync: Synchronizer<Medicine> = Synchronizer::new(INVENTORY);
        let err = sync
            .add(&mut store, medicine("Aspirin", "A1", "1"))
            .unwrap_err();
        assert!(matches!(err, PharmacyError::NotReady(SyncState::Idle)));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn add_appends_and_commits_once() {
        let mut store = StoreFixture::new()
            .with_medicines(&[medicine("Aspirin", "A1", "10")])
            .store;
        let mut sync = loaded(&store);
        let added = medicine("Bextra", "B1", "5");

        sync.add(&mut store, added.clone()).unwrap();

        assert_eq!(sync.items().len(), 2);
        assert_eq!(sync.items()[1], added);
        assert_eq!(store.writes().len(), 1);
        assert_eq!(store.writes()[0].document, INVENTORY.document);
        assert_eq!(store.writes()[0].field, INVENTORY.field);
        assert_eq!(committed(&store), sync.items());
    }

    #[test]
    fn update_preserves_length_and_neighbours() {
        let mut store = StoreFixture::new().with_medicines(&abc()).store;
        let mut sync = loaded(&store);
        let replacement = medicine("Bextra", "B1", "50");

        sync.update(&mut store, 1, replacement.clone()).unwrap();

        let items = sync.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], abc()[0]);
        assert_eq!(items[1], replacement);
        assert_eq!(items[2], abc()[2]);
        assert_eq!(committed(&store), items);
    }

    #[test]
    fn delete_closes_gap_in_order() {
        let mut store = StoreFixture::new().with_medicines(&abc()).store;
        let mut sync = loaded(&store);

        let removed = sync.delete(&mut store, 0).unwrap();

        assert_eq!(removed.name, "Aspirin");
        let names: Vec<_> = sync.items().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Bextra", "Codeine"]);
        assert_eq!(committed(&store), sync.items());
    }

    #[test]
    fn out_of_range_position_does_not_write() {
        let mut store = StoreFixture::new().with_medicines(&abc()).store;
        let mut sync = loaded(&store);

        let err = sync.delete(&mut store, 3).unwrap_err();
        assert!(matches!(
            err,
            PharmacyError::PositionOutOfRange { position: 3, len: 3 }
        ));
        let err = sync
            .update(&mut store, 7, medicine("X", "X", "1"))
            .unwrap_err();
        assert!(matches!(err, PharmacyError::PositionOutOfRange { .. }));
        assert!(store.writes().is_empty());
        assert_eq!(sync.state(), SyncState::Ready);
    }

    #[test]
    fn commit_of_loaded_sequence_is_a_no_op() {
        let mut store = StoreFixture::new().with_medicines(&abc()).store;
        let before = store.fetch_document(INVENTORY.document).unwrap();
        let mut sync = loaded(&store);

        let items = sync.items().to_vec();
        sync.commit(&mut store, items).unwrap();

        let after = store.fetch_document(INVENTORY.document).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn failed_commit_keeps_local_change_until_reload() {
        let mut store = StoreFixture::new().with_medicines(&abc()).store;
        let mut sync = loaded(&store);

        store.set_offline(true);
        let err = sync
            .add(&mut store, medicine("Dolex", "D1", "1"))
            .unwrap_err();
        assert!(matches!(err, PharmacyError::StoreUnavailable(_)));
        assert_eq!(sync.state(), SyncState::Failed);
        assert_eq!(sync.items().len(), 4);

        // Failed only accepts a reload.
        store.set_offline(false);
        assert!(matches!(
            sync.delete(&mut store, 0),
            Err(PharmacyError::NotReady(SyncState::Failed))
        ));

        sync.load(&store).unwrap();
        assert_eq!(sync.items(), abc().as_slice());
        assert_eq!(sync.state(), SyncState::Ready);
    }

    #[test]
    fn concurrent_sessions_last_commit_wins() {
        let mut store = StoreFixture::new()
            .with_medicines(&[medicine("Aspirin", "A1", "10")])
            .store;
        let mut first = loaded(&store);
        let mut second = loaded(&store);

        first.add(&mut store, medicine("Bextra", "B1", "5")).unwrap();
        second
            .add(&mut store, medicine("Codeine", "C1", "2"))
            .unwrap();

        let mut fresh = loaded(&store);
        let names: Vec<_> = fresh.items().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["Aspirin", "Codeine"]);

        // The first session's view is stale and will clobber on its next write.
        first.delete(&mut store, 0).unwrap();
        fresh.load(&store).unwrap();
        let names: Vec<_> = fresh.items().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["Bextra"]);
    }
}
