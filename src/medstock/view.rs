//! # Inventory View
//!
//! The display sequence shown to the user is derived from the authoritative
//! inventory and never written back. Each row remembers the position of its
//! record in the authoritative sequence, so edit and delete act on the record
//! the user saw, not on whatever sits at the same display number in the
//! unfiltered list.
//!
//! Rows are numbered from 1 in display order:
//!
//! ```text
//! authoritative        search "co"            rows
//! 0 Aspirin            ─┐
//! 1 Codeine            ─┼─► Codeine   ──►     1 → position 1
//! 2 Cough syrup        ─┘   Cough syrup ──►   2 → position 2
//! ```

use crate::error::{PharmacyError, Result};
use crate::model::Medicine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMedicine {
    /// 1-based number shown to the user.
    pub row: usize,
    /// Index into the authoritative sequence.
    pub position: usize,
    pub medicine: Medicine,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryView {
    query: Option<String>,
    rows: Vec<DisplayMedicine>,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active filter, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn rows(&self) -> &[DisplayMedicine] {
        &self.rows
    }

    pub fn is_filtered(&self) -> bool {
        self.query.is_some()
    }

    /// Applies a search. An empty query clears the filter.
    pub fn search(&mut self, query: &str, items: &[Medicine]) {
        self.query = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        self.refresh(items);
    }

    /// Re-derives the rows under the active filter.
    pub fn refresh(&mut self, items: &[Medicine]) {
        let needle = self.query.as_ref().map(|q| q.to_lowercase());
        self.rows = items
            .iter()
            .enumerate()
            .filter(|(_, medicine)| match &needle {
                Some(needle) => medicine.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .enumerate()
            .map(|(i, (position, medicine))| DisplayMedicine {
                row: i + 1,
                position,
                medicine: medicine.clone(),
            })
            .collect();
    }

    /// Maps a display row to its position in `items`.
    ///
    /// Fails if the row does not exist, or if the record at that position is
    /// no longer the one displayed.
    pub fn resolve(&self, row: usize, items: &[Medicine]) -> Result<usize> {
        let shown = self
            .rows
            .iter()
            .find(|dm| dm.row == row)
            .ok_or(PharmacyError::RowNotFound(row))?;
        match items.get(shown.position) {
            Some(current) if *current == shown.medicine => Ok(shown.position),
            _ => Err(PharmacyError::RowNotFound(row)),
        }
    }
}
