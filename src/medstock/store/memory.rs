use super::{Document, DocumentStore, StoreError, StoreResult};
use serde_json::Value;
use std::collections::HashMap;

/// One recorded `overwrite_field` call.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRecord {
    pub document: String,
    pub field: String,
    pub value: Value,
}

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: HashMap<String, Document>,
    writes: Vec<WriteRecord>,
    offline: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline, every call fails with [`StoreError::Unavailable`].
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Successful writes, oldest first.
    pub fn writes(&self) -> &[WriteRecord] {
        &self.writes
    }

    /// Seeds a document directly, bypassing the write log.
    pub fn insert_document(&mut self, id: &str, document: Document) {
        self.documents.insert(id.to_string(), document);
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline {
            return Err(StoreError::Unavailable("store is offline".to_string()));
        }
        Ok(())
    }
}

impl DocumentStore for InMemoryStore {
    fn fetch_document(&self, id: &str) -> StoreResult<Option<Document>> {
        self.check_online()?;
        Ok(self.documents.get(id).cloned())
    }

    fn overwrite_field(&mut self, id: &str, field: &str, sequence: Value) -> StoreResult<()> {
        self.check_online()?;
        self.documents
            .entry(id.to_string())
            .or_default()
            .insert(field.to_string(), sequence.clone());
        self.writes.push(WriteRecord {
            document: id.to_string(),
            field: field.to_string(),
            value: sequence,
        });
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Medicine, Order};
    use crate::sync::{INVENTORY, SALES};

    pub fn medicine(name: &str, id: &str, quantity: &str) -> Medicine {
        Medicine {
            name: name.to_string(),
            id: id.to_string(),
            quantity: quantity.to_string(),
            ..Medicine::default()
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_medicines(mut self, medicines: &[Medicine]) -> Self {
            let mut document = Document::new();
            document.insert(
                INVENTORY.field.to_string(),
                serde_json::to_value(medicines).unwrap(),
            );
            self.store.insert_document(INVENTORY.document, document);
            self
        }

        pub fn with_orders(mut self, orders: &[Order]) -> Self {
            let mut document = Document::new();
            document.insert(
                SALES.field.to_string(),
                serde_json::to_value(orders).unwrap(),
            );
            self.store.insert_document(SALES.document, document);
            self
        }
    }
}
