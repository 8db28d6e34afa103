use crate::config::PharmacyConfig;
use crate::error::Result;
use crate::form::MedicineForm;
use crate::model::{Medicine, Order};
use crate::sales::SalesSummary;
use crate::store::DocumentStore;
use crate::sync::{Synchronizer, INVENTORY, SALES};
use crate::view::{DisplayMedicine, InventoryView};

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod load;
pub mod order;
pub mod orders;
pub mod search;
pub mod summary;
pub mod update;

/// Everything a session holds between user actions.
///
/// The session is the only owner of the working copies; commands mutate them
/// through the synchronizers and then re-derive the view.
#[derive(Debug)]
pub struct Session {
    pub inventory: Synchronizer<Medicine>,
    pub sales: Synchronizer<Order>,
    pub view: InventoryView,
    pub form: MedicineForm,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            inventory: Synchronizer::new(INVENTORY),
            sales: Synchronizer::new(SALES),
            view: InventoryView::new(),
            form: MedicineForm::new(),
        }
    }

    /// Re-derives the display rows from the current inventory.
    pub fn refresh_view(&mut self) {
        self.view.refresh(self.inventory.items());
    }

    /// Runs a store-touching step, then refreshes the view whether it
    /// succeeded or not: a failed commit still changes the working copy.
    pub(crate) fn mutate<S, T, F>(&mut self, store: &mut S, step: F) -> Result<T>
    where
        S: DocumentStore,
        F: FnOnce(&mut Self, &mut S) -> Result<T>,
    {
        let outcome = step(self, store);
        self.refresh_view();
        outcome
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_medicines: Vec<Medicine>,
    pub listed_medicines: Vec<DisplayMedicine>,
    pub listed_orders: Vec<Order>,
    pub summary: Option<SalesSummary>,
    pub config: Option<PharmacyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_medicines(mut self, medicines: Vec<Medicine>) -> Self {
        self.affected_medicines = medicines;
        self
    }

    pub fn with_listed_medicines(mut self, medicines: Vec<DisplayMedicine>) -> Self {
        self.listed_medicines = medicines;
        self
    }

    pub fn with_listed_orders(mut self, orders: Vec<Order>) -> Self {
        self.listed_orders = orders;
        self
    }

    pub fn with_summary(mut self, summary: SalesSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: PharmacyConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Session;
    use crate::model::Medicine;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    /// A loaded session over a store seeded with `medicines`.
    pub fn session_with(medicines: &[Medicine]) -> (Session, InMemoryStore) {
        let store = StoreFixture::new().with_medicines(medicines).store;
        let mut session = Session::new();
        super::load::run(&mut session, &store).unwrap();
        (session, store)
    }
}
