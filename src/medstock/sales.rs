//! Order recording and sales aggregation.
//!
//! Orders are appended to the sales ledger with the same whole-sequence
//! overwrite as the inventory. Recording an order does not touch stock levels.

use crate::error::{PharmacyError, Result};
use crate::model::{Order, OrderDraft};
use crate::store::DocumentStore;
use crate::sync::Synchronizer;
use crate::validation::validate_order;
use chrono::NaiveDate;

/// Validates `draft`, prices it, numbers it and appends it to the ledger.
///
/// Order ids are one past the highest id already in the ledger, so they stay
/// monotonic even when the ledger was written by another client.
pub fn record<S: DocumentStore>(
    ledger: &mut Synchronizer<Order>,
    store: &mut S,
    draft: &OrderDraft,
    date: NaiveDate,
) -> Result<Order> {
    let valid = validate_order(draft)?;
    let order = Order {
        order_id: next_order_id(ledger.items())?,
        order_date: date,
        medicine_name: valid.medicine_name,
        quantity: valid.quantity,
        unit_price: valid.unit_price,
        total_revenue: round_cents(valid.quantity as f64 * valid.unit_price),
    };
    ledger.add(store, order.clone())?;
    tracing::info!(
        order_id = order.order_id,
        total = order.total_revenue,
        "order recorded"
    );
    Ok(order)
}

/// One past the highest id in `orders`, or 1 for an empty ledger.
pub fn next_order_id(orders: &[Order]) -> Result<u64> {
    match orders.iter().map(|o| o.order_id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(PharmacyError::OrderIdsExhausted(max)),
    }
}

fn round_cents(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    if !scaled.is_finite() {
        return amount;
    }
    scaled.round() / 100.0
}

/// Totals for one medicine across all orders.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineSales {
    pub medicine_name: String,
    pub orders: usize,
    pub units: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesSummary {
    pub order_count: usize,
    pub units_sold: u64,
    pub revenue: f64,
    /// One line per medicine, in order of first sale.
    pub by_medicine: Vec<MedicineSales>,
}

/// Aggregates stored totals. Revenue is summed from each order's stored total,
/// not recomputed.
pub fn summarize(orders: &[Order]) -> SalesSummary {
    let mut summary = SalesSummary::default();
    for order in orders {
        summary.order_count += 1;
        summary.units_sold = summary.units_sold.saturating_add(order.quantity);
        summary.revenue += order.total_revenue;

        let existing = summary
            .by_medicine
            .iter()
            .position(|line| line.medicine_name == order.medicine_name);
        let line = match existing {
            Some(i) => &mut summary.by_medicine[i],
            None => {
                summary.by_medicine.push(MedicineSales {
                    medicine_name: order.medicine_name.clone(),
                    orders: 0,
                    units: 0,
                    revenue: 0.0,
                });
                let last = summary.by_medicine.len() - 1;
                &mut summary.by_medicine[last]
            }
        };
        line.orders += 1;
        line.units = line.units.saturating_add(order.quantity);
        line.revenue += order.total_revenue;
    }

    summary.revenue = round_cents(summary.revenue);
    for line in &mut summary.by_medicine {
        line.revenue = round_cents(line.revenue);
    }
    summary
}
