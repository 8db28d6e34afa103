use crate::commands::{CmdResult, Session};
use crate::error::Result;
use crate::sales::summarize;

pub fn run(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(summarize(session.sales.items())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order;
    use crate::commands::test_support::session_with;
    use crate::model::OrderDraft;
    use chrono::NaiveDate;

    #[test]
    fn summarizes_recorded_orders() {
        let (mut session, mut store) = session_with(&[]);
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        for draft in [
            OrderDraft::new("Aspirin", "2", "1.50"),
            OrderDraft::new("Aspirin", "1", "1.50"),
            OrderDraft::new("Bextra", "1", "10"),
        ] {
            order::run(&mut session, &mut store, &draft, date).unwrap();
        }

        let summary = run(&session).unwrap().summary.unwrap();
        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.units_sold, 4);
        assert_eq!(summary.revenue, 14.5);
        assert_eq!(summary.by_medicine[0].units, 3);
    }
}
