//! Field validation for medicine and order drafts.
//!
//! Rules are checked in a fixed order and evaluation stops at the first
//! failure. For medicines:
//!
//! 1. name is non-empty and at most 100 characters
//! 2. quantity is non-empty
//! 3. quantity contains digits only
//! 4. id is non-empty and at most 100 characters
//!
//! `usage` and `side_effects` are free text and never rejected.

use crate::model::{Medicine, MedicineDraft, OrderDraft};

/// Upper bound, in characters, for names and identifiers.
pub const MAX_TEXT_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
    Id,
    Medicine,
    UnitPrice,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::Quantity => write!(f, "Quantity"),
            Field::Id => write!(f, "ID"),
            Field::Medicine => write!(f, "Medicine"),
            Field::UnitPrice => write!(f, "Unit price"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field is empty.
    Required,
    /// The field exceeds `max` characters.
    TooLong { max: usize },
    /// The field contains something other than ASCII digits.
    DigitsOnly,
    /// The field is not a decimal amount with at most two fractional digits.
    Decimal,
    /// The field must be at least one.
    Positive,
    /// The field, or the total it produces, is too large to store.
    OutOfRange,
}

/// The first rule a draft failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub rule: Rule,
}

impl ValidationError {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "{} is required", self.field),
            Rule::TooLong { max } => {
                write!(f, "{} must be at most {} characters", self.field, max)
            }
            Rule::DigitsOnly => write!(f, "{} must contain digits only", self.field),
            Rule::Decimal => write!(
                f,
                "{} must be a number with at most two decimal places",
                self.field
            ),
            Rule::Positive => write!(f, "{} must be at least 1", self.field),
            Rule::OutOfRange => write!(f, "{} is too large", self.field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a medicine draft, returning the record to persist.
///
/// # Examples
/// ```
/// use medstock::model::MedicineDraft;
/// use medstock::validation::{validate_medicine, Field, Rule};
///
/// let ok = validate_medicine(&MedicineDraft::new("Aspirin", "10", "A1"));
/// assert!(ok.is_ok());
///
/// let err = validate_medicine(&MedicineDraft::new("Aspirin", "", "A1")).unwrap_err();
/// assert_eq!((err.field, err.rule), (Field::Quantity, Rule::Required));
///
/// let err = validate_medicine(&MedicineDraft::new("Aspirin", "1.5", "A1")).unwrap_err();
/// assert_eq!((err.field, err.rule), (Field::Quantity, Rule::DigitsOnly));
/// ```
pub fn validate_medicine(draft: &MedicineDraft) -> Result<Medicine, ValidationError> {
    check_text(Field::Name, &draft.name)?;
    check_digits(Field::Quantity, &draft.quantity)?;
    check_text(Field::Id, &draft.id)?;

    Ok(Medicine {
        name: draft.name.clone(),
        id: draft.id.clone(),
        quantity: draft.quantity.clone(),
        usage: draft.usage.clone(),
        side_effects: draft.side_effects.clone(),
    })
}

/// A validated order, ready to be priced and numbered.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder {
    pub medicine_name: String,
    pub quantity: u64,
    pub unit_price: f64,
}

pub fn validate_order(draft: &OrderDraft) -> Result<ValidOrder, ValidationError> {
    check_text(Field::Medicine, &draft.medicine_name)?;
    check_digits(Field::Quantity, &draft.quantity)?;
    let quantity: u64 = draft
        .quantity
        .parse()
        .map_err(|_| ValidationError::new(Field::Quantity, Rule::OutOfRange))?;
    if quantity == 0 {
        return Err(ValidationError::new(Field::Quantity, Rule::Positive));
    }
    let unit_price = parse_price(&draft.unit_price)?;
    if !(quantity as f64 * unit_price * 100.0).is_finite() {
        return Err(ValidationError::new(Field::UnitPrice, Rule::OutOfRange));
    }

    Ok(ValidOrder {
        medicine_name: draft.medicine_name.clone(),
        quantity,
        unit_price,
    })
}

fn check_text(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, Rule::Required));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::new(
            field,
            Rule::TooLong { max: MAX_TEXT_LEN },
        ));
    }
    Ok(())
}

fn check_digits(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, Rule::Required));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(field, Rule::DigitsOnly));
    }
    Ok(())
}

fn parse_price(value: &str) -> Result<f64, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(Field::UnitPrice, Rule::Required));
    }
    let invalid = ValidationError::new(Field::UnitPrice, Rule::Decimal);
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) {
        return Err(invalid);
    }
    if let Some(fraction) = fraction {
        if !all_digits(fraction) || fraction.len() > 2 {
            return Err(invalid);
        }
    }
    let price: f64 = value.parse().map_err(|_| invalid)?;
    if !price.is_finite() {
        return Err(ValidationError::new(Field::UnitPrice, Rule::OutOfRange));
    }
    Ok(price)
}
