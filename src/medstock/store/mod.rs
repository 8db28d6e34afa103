//! # Storage Layer
//!
//! The application keeps each collection as one array-valued field inside one
//! document. The [`DocumentStore`] trait is the whole surface the core needs:
//! read a document, and overwrite one of its fields.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per document in a data directory.
//!   Writes go through a temp file and a rename.
//! - [`memory::InMemoryStore`]: documents in a map. Records every write and can
//!   be switched offline, for tests.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── pharmacy-inventory.json   # { "medicines": [ ... ] }
//! ├── pharmacy-sales.json       # { "orders": [ ... ] }
//! └── config.json               # PharmacyConfig
//! ```
//!
//! There is no version token on a document. Two sessions writing the same
//! field will overwrite each other; the last write wins.

use serde_json::{Map, Value};
use thiserror::Error;

pub mod fs;
pub mod memory;

/// A document: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Unavailable(String),

    #[error("Document {document} is malformed: {reason}")]
    Malformed { document: String, reason: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Abstract interface to the external document store.
pub trait DocumentStore {
    /// Fetch a document by id. `None` if it does not exist.
    fn fetch_document(&self, id: &str) -> StoreResult<Option<Document>>;

    /// Replace a single field of a document, creating the document if needed.
    /// Other fields are left untouched.
    fn overwrite_field(&mut self, id: &str, field: &str, sequence: Value) -> StoreResult<()>;
}
