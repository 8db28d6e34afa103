use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;

/// Filters the view by name. An empty query restores the full list.
pub fn run(session: &mut Session, query: &str) -> Result<CmdResult> {
    session.view.search(query, session.inventory.items());

    let mut result = CmdResult::default();
    if session.view.is_filtered() && session.view.rows().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No medicines match \"{}\"",
            query
        )));
    }
    Ok(result.with_listed_medicines(session.view.rows().to_vec()))
}
