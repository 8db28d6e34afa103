use crate::commands::{CmdResult, Session};
use crate::error::Result;

/// Lists recorded orders, oldest first. The ledger is read-only here.
pub fn run(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_orders(session.sales.items().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order;
    use crate::commands::test_support::session_with;
    use crate::model::OrderDraft;
    use chrono::NaiveDate;

    #[test]
    fn lists_orders_in_recording_order() {
        let (mut session, mut store) = session_with(&[]);
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        order::run(&mut session, &mut store, &OrderDraft::new("A", "1", "1"), date).unwrap();
        order::run(&mut session, &mut store, &OrderDraft::new("B", "2", "1"), date).unwrap();

        let listed = run(&session).unwrap().listed_orders;
        let ids: Vec<_> = listed.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(listed[1].medicine_name, "B");
    }
}
