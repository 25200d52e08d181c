// ── Central catalog store ──
//
// One store and one projector per entity kind, plus a last-error slot
// per kind. Only the `Catalog` writes here; consumers get snapshots,
// lookups, and subscriptions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::entity_store::EntityStore;
use super::projector::IndexProjector;
use crate::model::{Coin, Collection, EntityId, EntityKind, Group};
use crate::stream::EntityStream;

/// Reactive store for the Group → Collection → Coin hierarchy.
pub struct CatalogStore {
    pub(crate) groups: EntityStore<Group>,
    pub(crate) collections: EntityStore<Collection>,
    pub(crate) coins: EntityStore<Coin>,
    group_index: Arc<IndexProjector<Group>>,
    collection_index: Arc<IndexProjector<Collection>>,
    coin_index: Arc<IndexProjector<Coin>>,
    group_error: watch::Sender<Option<String>>,
    collection_error: watch::Sender<Option<String>>,
    coin_error: watch::Sender<Option<String>>,
    pub(crate) last_full_resync: watch::Sender<Option<DateTime<Utc>>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        let groups = EntityStore::new();
        let collections = EntityStore::new();
        let coins = EntityStore::new();
        let group_index = IndexProjector::attach(&groups);
        let collection_index = IndexProjector::attach(&collections);
        let coin_index = IndexProjector::attach(&coins);
        let (group_error, _) = watch::channel(None);
        let (collection_error, _) = watch::channel(None);
        let (coin_error, _) = watch::channel(None);
        let (last_full_resync, _) = watch::channel(None);

        Self {
            groups,
            collections,
            coins,
            group_index,
            collection_index,
            coin_index,
            group_error,
            collection_error,
            coin_error,
            last_full_resync,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn groups_snapshot(&self) -> Arc<Vec<Arc<Group>>> {
        self.groups.snapshot()
    }

    pub fn collections_snapshot(&self) -> Arc<Vec<Arc<Collection>>> {
        self.collections.snapshot()
    }

    pub fn coins_snapshot(&self) -> Arc<Vec<Arc<Coin>>> {
        self.coins.snapshot()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn group_by_id(&self, id: &EntityId) -> Option<Arc<Group>> {
        self.group_index.lookup(id)
    }

    pub fn collection_by_id(&self, id: &EntityId) -> Option<Arc<Collection>> {
        self.collection_index.lookup(id)
    }

    pub fn coin_by_id(&self, id: &EntityId) -> Option<Arc<Coin>> {
        self.coin_index.lookup(id)
    }

    /// Flat collections whose `groupId` points at `group_id`.
    pub fn collections_in_group(&self, group_id: &EntityId) -> Vec<Arc<Collection>> {
        self.collections
            .snapshot()
            .iter()
            .filter(|c| c.group_id.as_ref() == Some(group_id))
            .cloned()
            .collect()
    }

    /// Flat coins whose `collectionId` points at `collection_id`.
    pub fn coins_in_collection(&self, collection_id: &EntityId) -> Vec<Arc<Coin>> {
        self.coins
            .snapshot()
            .iter()
            .filter(|c| c.collection_id.as_ref() == Some(collection_id))
            .cloned()
            .collect()
    }

    // ── Counts ───────────────────────────────────────────────────────

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    pub fn coin_count(&self) -> usize {
        self.coins.len()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_groups(&self) -> EntityStream<Group> {
        EntityStream::new(self.groups.subscribe())
    }

    pub fn subscribe_collections(&self) -> EntityStream<Collection> {
        EntityStream::new(self.collections.subscribe())
    }

    pub fn subscribe_coins(&self) -> EntityStream<Coin> {
        EntityStream::new(self.coins.subscribe())
    }

    // ── Error slots ──────────────────────────────────────────────────

    /// Last failure message recorded for `kind`, if any.
    pub fn error(&self, kind: EntityKind) -> Option<String> {
        self.error_slot(kind).borrow().clone()
    }

    pub fn subscribe_error(&self, kind: EntityKind) -> watch::Receiver<Option<String>> {
        self.error_slot(kind).subscribe()
    }

    pub(crate) fn set_error(&self, kind: EntityKind, message: String) {
        self.error_slot(kind).send_replace(Some(message));
    }

    pub(crate) fn clear_error(&self, kind: EntityKind) {
        self.error_slot(kind).send_if_modified(|slot| slot.take().is_some());
    }

    fn error_slot(&self, kind: EntityKind) -> &watch::Sender<Option<String>> {
        match kind {
            EntityKind::Group => &self.group_error,
            EntityKind::Collection => &self.collection_error,
            EntityKind::Coin => &self.coin_error,
        }
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_full_resync(&self) -> Option<DateTime<Utc>> {
        *self.last_full_resync.borrow()
    }

    /// Empty every store and error slot.
    pub(crate) fn clear_all(&self) {
        self.groups.clear();
        self.collections.clear();
        self.coins.clear();
        self.group_error.send_replace(None);
        self.collection_error.send_replace(None);
        self.coin_error.send_replace(None);
        self.last_full_resync.send_replace(None);
    }
}
