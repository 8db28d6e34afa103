use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::OrderDraft;
use crate::sales;
use crate::store::DocumentStore;
use chrono::NaiveDate;

pub fn run<S: DocumentStore>(
    session: &mut Session,
    store: &mut S,
    draft: &OrderDraft,
    date: NaiveDate,
) -> Result<CmdResult> {
    let order = sales::record(&mut session.sales, store, draft, date)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Order #{} recorded: {} x {}",
        order.order_id, order.quantity, order.medicine_name
    )));

    let wanted = order.medicine_name.to_lowercase();
    let stocked = session
        .inventory
        .items()
        .iter()
        .any(|m| m.name.to_lowercase() == wanted);
    if !stocked {
        result.add_message(CmdMessage::warning(format!(
            "\"{}\" is not in the inventory",
            order.medicine_name
        )));
    }

    Ok(result.with_listed_orders(vec![order]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session_with;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::medicine;
    use crate::sync::SALES;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn records_order_without_touching_stock() {
        let (mut session, mut store) = session_with(&[medicine("Aspirin", "A1", "10")]);

        let result = run(
            &mut session,
            &mut store,
            &OrderDraft::new("aspirin", "4", "1.25"),
            date(),
        )
        .unwrap();

        assert_eq!(result.listed_orders[0].total_revenue, 5.0);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(session.inventory.items()[0].quantity, "10");
        assert_eq!(store.writes().len(), 1);
        assert_eq!(store.writes()[0].document, SALES.document);
    }

    #[test]
    fn warns_for_unknown_medicine() {
        let (mut session, mut store) = session_with(&[]);
        let result = run(
            &mut session,
            &mut store,
            &OrderDraft::new("Zinc", "1", "3"),
            date(),
        )
        .unwrap();
        assert!(matches!(result.messages[1].level, MessageLevel::Warning));
        assert_eq!(session.sales.items().len(), 1);
    }
}
