use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;

/// Lists the current view: filtered if a search is active, otherwise everything.
pub fn run(session: &Session) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(query) = session.view.query() {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} medicines matching \"{}\"",
            session.view.rows().len(),
            session.inventory.items().len(),
            query
        )));
    }
    Ok(result.with_listed_medicines(session.view.rows().to_vec()))
}
