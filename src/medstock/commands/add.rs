use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::MedicineDraft;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(
    session: &mut Session,
    store: &mut S,
    draft: MedicineDraft,
) -> Result<CmdResult> {
    session.form.set_draft(draft);
    let medicine = session.mutate(store, |session, store| {
        session.form.submit(&mut session.inventory, store)
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Medicine added: {} ({})",
        medicine.name, medicine.id
    )));
    Ok(result.with_affected_medicines(vec![medicine]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session_with;
    use crate::commands::{list, search};
    use crate::error::PharmacyError;
    use crate::store::memory::fixtures::medicine;
    use crate::sync::INVENTORY;

    #[test]
    fn appends_draft_and_commits_full_list() {
        let (mut session, mut store) = session_with(&[medicine("Aspirin", "A1", "10")]);

        run(
            &mut session,
            &mut store,
            MedicineDraft::new("Bextra", "5", "B1"),
        )
        .unwrap();

        let items = session.inventory.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], medicine("Bextra", "B1", "5"));
        assert_eq!(store.writes().len(), 1);
        assert_eq!(store.writes()[0].document, INVENTORY.document);
        let committed: Vec<crate::model::Medicine> =
            serde_json::from_value(store.writes()[0].value.clone()).unwrap();
        assert_eq!(committed, items);
    }

    #[test]
    fn keeps_optional_fields() {
        let (mut session, mut store) = session_with(&[]);
        let draft = MedicineDraft::new("Bextra", "5", "B1")
            .with_usage("Arthritis")
            .with_side_effects("Rash");

        let result = run(&mut session, &mut store, draft).unwrap();
        assert_eq!(result.affected_medicines[0].usage, "Arthritis");
        assert_eq!(session.inventory.items()[0].side_effects, "Rash");
    }

    #[test]
    fn rejected_draft_leaves_inventory_unchanged() {
        let (mut session, mut store) = session_with(&[medicine("Aspirin", "A1", "10")]);

        let err = run(&mut session, &mut store, MedicineDraft::new("", "5", "X")).unwrap_err();

        assert!(matches!(err, PharmacyError::Validation(_)));
        assert_eq!(session.inventory.items(), &[medicine("Aspirin", "A1", "10")]);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn new_row_shows_up_in_active_filter() {
        let (mut session, mut store) = session_with(&[medicine("Aspirin", "A1", "10")]);
        search::run(&mut session, "b").unwrap();
        assert!(list::run(&session).unwrap().listed_medicines.is_empty());

        run(
            &mut session,
            &mut store,
            MedicineDraft::new("Bextra", "5", "B1"),
        )
        .unwrap();

        let rows = list::run(&session).unwrap().listed_medicines;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].medicine.name, "Bextra");
        assert_eq!(rows[0].position, 1);
    }
}
