use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::DocumentStore;

/// Loads both collections from the store. Also the recovery path out of a
/// failed state.
pub fn run<S: DocumentStore>(session: &mut Session, store: &S) -> Result<CmdResult> {
    let loaded = session.inventory.load(store).map(|items| items.len());
    session.refresh_view();
    let medicines = loaded?;
    let orders = session.sales.load(store)?.len();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Loaded {} medicines and {} orders",
        medicines, orders
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PharmacyError;
    use crate::store::memory::fixtures::{medicine, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use crate::sync::SyncState;

    #[test]
    fn loads_inventory_and_derives_view() {
        let store = StoreFixture::new()
            .with_medicines(&[medicine("Aspirin", "A1", "10")])
            .store;
        let mut session = Session::new();
        run(&mut session, &store).unwrap();

        assert_eq!(session.inventory.state(), SyncState::Ready);
        assert_eq!(session.sales.state(), SyncState::Ready);
        assert_eq!(session.view.rows().len(), 1);
    }

    #[test]
    fn unavailable_store_is_reported() {
        let mut store = InMemoryStore::new();
        store.set_offline(true);
        let mut session = Session::new();

        let err = run(&mut session, &store).unwrap_err();
        assert!(matches!(err, PharmacyError::StoreUnavailable(_)));
        assert_eq!(session.inventory.state(), SyncState::Failed);
    }
}
