// ── Selection state ──
//
// Tracks which group or collection a consumer is focused on. Resolution
// reads through the store's projectors and never mutates anything.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{Collection, EntityId, Group};
use crate::store::CatalogStore;

/// What is currently focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Group(EntityId),
    Collection(EntityId),
}

/// A selection looked up against the current cache contents.
#[derive(Debug, Clone)]
pub enum ResolvedSelection {
    Group(Arc<Group>),
    Collection(Arc<Collection>),
}

pub struct SelectionState {
    current: watch::Sender<Option<Selection>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    pub fn select(&self, selection: Selection) {
        self.current.send_replace(Some(selection));
    }

    pub fn clear(&self) {
        self.current.send_replace(None);
    }

    pub fn current(&self) -> Option<Selection> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Selection>> {
        self.current.subscribe()
    }

    /// Look the selection up in `store`. `None` when nothing is selected
    /// or the selected entity is no longer cached.
    pub fn resolve(&self, store: &CatalogStore) -> Option<ResolvedSelection> {
        match self.current()? {
            Selection::Group(id) => store.group_by_id(&id).map(ResolvedSelection::Group),
            Selection::Collection(id) => store
                .collection_by_id(&id)
                .map(ResolvedSelection::Collection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_store_without_touching_it() {
        let store = CatalogStore::new();
        store.groups.upsert(Group {
            id: EntityId::from("g1"),
            name: "Germany".into(),
            collections: None,
        });
        let version = store.groups.version();

        let selection = SelectionState::new();
        assert!(selection.resolve(&store).is_none());

        selection.select(Selection::Group(EntityId::from("g1")));
        assert!(matches!(
            selection.resolve(&store),
            Some(ResolvedSelection::Group(g)) if g.name == "Germany"
        ));
        assert_eq!(store.groups.version(), version);
    }

    #[test]
    fn stale_selection_resolves_to_none() {
        let store = CatalogStore::new();
        let selection = SelectionState::new();
        selection.select(Selection::Collection(EntityId::from("gone")));

        assert!(selection.resolve(&store).is_none());
        assert!(selection.current().is_some());

        selection.clear();
        assert!(selection.current().is_none());
    }
}
