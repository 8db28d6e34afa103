use crate::error::Result;
use crate::model::{Medicine, MedicineDraft};
use crate::store::DocumentStore;
use crate::sync::Synchronizer;
use crate::validation::{validate_medicine, ValidationError};

/// State behind the "add medicine" form: the fields being typed and the last
/// validation error shown to the user.
#[derive(Debug, Clone, Default)]
pub struct MedicineForm {
    draft: MedicineDraft,
    error: Option<ValidationError>,
}

impl MedicineForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &MedicineDraft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: MedicineDraft) {
        self.draft = draft;
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Validates the draft and appends it to the inventory.
    ///
    /// A validation failure is recorded and returned without touching the
    /// inventory. On success the error is cleared and, once the store has
    /// accepted the write, the draft is reset. If the store rejects the write
    /// the draft is kept for resubmission.
    pub fn submit<S: DocumentStore>(
        &mut self,
        inventory: &mut Synchronizer<Medicine>,
        store: &mut S,
    ) -> Result<Medicine> {
        let medicine = match validate_medicine(&self.draft) {
            Ok(medicine) => medicine,
            Err(err) => {
                tracing::debug!(field = %err.field, "draft rejected: {}", err);
                self.error = Some(err);
                return Err(err.into());
            }
        };
        self.error = None;

        inventory.add(store, medicine.clone())?;
        self.draft = MedicineDraft::default();
        Ok(medicine)
    }
}
