use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(
    session: &mut Session,
    store: &mut S,
    row: usize,
) -> Result<CmdResult> {
    let position = session.view.resolve(row, session.inventory.items())?;
    let removed = session.mutate(store, |session, store| {
        session.inventory.delete(store, position)
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Medicine deleted ({}): {}",
        row, removed.name
    )));
    Ok(result.with_affected_medicines(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session_with;
    use crate::commands::{list, search};
    use crate::error::PharmacyError;
    use crate::store::memory::fixtures::medicine;
    use crate::sync::SyncState;

    fn names(session: &Session) -> Vec<String> {
        session
            .inventory
            .items()
            .iter()
            .map(|m| m.name.clone())
            .collect()
    }

    #[test]
    fn removes_and_preserves_order() {
        let (mut session, mut store) = session_with(&[
            medicine("Aspirin", "A1", "10"),
            medicine("Bextra", "B1", "5"),
            medicine("Codeine", "C1", "2"),
        ]);

        let result = run(&mut session, &mut store, 2).unwrap();

        assert_eq!(result.affected_medicines[0].name, "Bextra");
        assert_eq!(names(&session), vec!["Aspirin", "Codeine"]);
        assert_eq!(store.writes().len(), 1);
        // Rows are renumbered after the gap closes.
        let rows = list::run(&session).unwrap().listed_medicines;
        assert_eq!(rows[1].row, 2);
        assert_eq!(rows[1].medicine.name, "Codeine");
    }

    #[test]
    fn filtered_row_deletes_by_identity() {
        let (mut session, mut store) = session_with(&[
            medicine("Aspirin", "A1", "10"),
            medicine("Bextra", "B1", "5"),
            medicine("Aspirin Forte", "A2", "4"),
        ]);
        search::run(&mut session, "aspirin").unwrap();

        // Row 2 of the filtered view is "Aspirin Forte", position 2.
        run(&mut session, &mut store, 2).unwrap();

        assert_eq!(names(&session), vec!["Aspirin", "Bextra"]);
        let rows = list::run(&session).unwrap().listed_medicines;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].medicine.name, "Aspirin");
    }

    #[test]
    fn store_failure_diverges_until_reload() {
        let (mut session, mut store) = session_with(&[
            medicine("Aspirin", "A1", "10"),
            medicine("Bextra", "B1", "5"),
        ]);
        store.set_offline(true);

        let err = run(&mut session, &mut store, 1).unwrap_err();

        assert!(matches!(err, PharmacyError::StoreUnavailable(_)));
        assert_eq!(names(&session), vec!["Bextra"]);
        assert_eq!(session.view.rows().len(), 1);
        assert_eq!(session.inventory.state(), SyncState::Failed);

        store.set_offline(false);
        crate::commands::load::run(&mut session, &store).unwrap();
        assert_eq!(names(&session), vec!["Aspirin", "Bextra"]);
    }
}
