use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::MedicinePatch;
use crate::store::DocumentStore;
use crate::validation::validate_medicine;

/// Edits the medicine shown at display `row`, re-validating the result.
pub fn run<S: DocumentStore>(
    session: &mut Session,
    store: &mut S,
    row: usize,
    patch: &MedicinePatch,
) -> Result<CmdResult> {
    let position = session.view.resolve(row, session.inventory.items())?;
    let draft = patch.apply(&session.inventory.items()[position]);
    let medicine = validate_medicine(&draft)?;

    session.mutate(store, |session, store| {
        session.inventory.update(store, position, medicine.clone())
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Medicine updated ({}): {}",
        row, medicine.name
    )));
    Ok(result.with_affected_medicines(vec![medicine]))
}
