//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! The facade:
//! - **Owns** the injected store and the session state
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no formatting.
//!
//! ## Generic Over DocumentStore
//!
//! `PharmacyApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `PharmacyApi<FileStore>`
//! - Testing: `PharmacyApi<InMemoryStore>`

use crate::commands::{self, Session};
use crate::error::Result;
use crate::model::{MedicineDraft, MedicinePatch, OrderDraft};
use crate::store::DocumentStore;
use crate::sync::SyncState;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// The main API facade for medstock operations.
///
/// Nothing is read from the store until [`PharmacyApi::load`] is called.
pub struct PharmacyApi<S: DocumentStore> {
    store: S,
    session: Session,
    data_dir: PathBuf,
}

impl<S: DocumentStore> PharmacyApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self {
            store,
            session: Session::new(),
            data_dir,
        }
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.session, &self.store)
    }

    pub fn add_medicine(&mut self, draft: MedicineDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.session, &mut self.store, draft)
    }

    pub fn update_medicine(
        &mut self,
        row: usize,
        patch: &MedicinePatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.session, &mut self.store, row, patch)
    }

    pub fn delete_medicine(&mut self, row: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.session, &mut self.store, row)
    }

    pub fn list_medicines(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn search_medicines(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.session, query)
    }

    /// Records an order dated today (local time).
    pub fn record_order(&mut self, draft: &OrderDraft) -> Result<commands::CmdResult> {
        self.record_order_on(draft, Local::now().date_naive())
    }

    pub fn record_order_on(
        &mut self,
        draft: &OrderDraft,
        date: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::order::run(&mut self.session, &mut self.store, draft, date)
    }

    pub fn list_orders(&self) -> Result<commands::CmdResult> {
        commands::orders::run(&self.session)
    }

    pub fn sales_summary(&self) -> Result<commands::CmdResult> {
        commands::summary::run(&self.session)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn inventory_state(&self) -> SyncState {
        self.session.inventory.state()
    }

    pub fn sales_state(&self) -> SyncState {
        self.session.sales.state()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
