use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A medicine record as stored in the inventory document.
///
/// Fields default to empty strings on read: records written by other clients
/// are displayed as-is, without re-checking the validation rules. Numbers and
/// booleans in text fields are read as their text, `null` as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Medicine {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub quantity: String,
    #[serde(deserialize_with = "lenient_text")]
    pub usage: String,
    #[serde(deserialize_with = "lenient_text")]
    pub side_effects: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

impl Medicine {
    /// Stock count, if the stored quantity is a digit string that fits a `u64`.
    pub fn quantity_count(&self) -> Option<u64> {
        if self.quantity.is_empty() || !self.quantity.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.quantity.parse().ok()
    }
}

/// A user-entered candidate medicine, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineDraft {
    pub name: String,
    pub quantity: String,
    pub id: String,
    pub usage: String,
    pub side_effects: String,
}

impl MedicineDraft {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_side_effects(mut self, side_effects: impl Into<String>) -> Self {
        self.side_effects = side_effects.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&Medicine> for MedicineDraft {
    fn from(medicine: &Medicine) -> Self {
        Self {
            name: medicine.name.clone(),
            quantity: medicine.quantity.clone(),
            id: medicine.id.clone(),
            usage: medicine.usage.clone(),
            side_effects: medicine.side_effects.clone(),
        }
    }
}

/// Partial edit of an existing medicine. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct MedicinePatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub id: Option<String>,
    pub usage: Option<String>,
    pub side_effects: Option<String>,
}

impl MedicinePatch {
    /// Overlays the patch on an existing record, producing a draft to validate.
    pub fn apply(&self, current: &Medicine) -> MedicineDraft {
        let mut draft = MedicineDraft::from(current);
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(quantity) = &self.quantity {
            draft.quantity = quantity.clone();
        }
        if let Some(id) = &self.id {
            draft.id = id.clone();
        }
        if let Some(usage) = &self.usage {
            draft.usage = usage.clone();
        }
        if let Some(side_effects) = &self.side_effects {
            draft.side_effects = side_effects.clone();
        }
        draft
    }
}

/// A recorded sale. Orders are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: u64,
    pub order_date: NaiveDate,
    pub medicine_name: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub total_revenue: f64,
}

/// A user-entered candidate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub medicine_name: String,
    pub quantity: String,
    pub unit_price: String,
}

impl OrderDraft {
    pub fn new(
        medicine_name: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        Self {
            medicine_name: medicine_name.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        }
    }
}
