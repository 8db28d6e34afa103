use crate::store::StoreError;
use crate::sync::SyncState;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PharmacyError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("List is not ready (state: {0})")]
    NotReady(SyncState),

    #[error("Position {position} is out of range (list has {len} entries)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Row {0} not found in the current view")]
    RowNotFound(usize),

    #[error("Order ids are exhausted (highest id is {0})")]
    OrderIdsExhausted(u64),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PharmacyError>;
