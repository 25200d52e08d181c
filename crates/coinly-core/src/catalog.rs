// ── Cascade coordinator ──
//
// `Catalog` is the single writer of the `CatalogStore`. Each mutation
// entry point calls the gateway, applies the confirmed result to the
// primary store, then re-fetches the parents whose nested aggregates
// the change invalidated. Outcomes are reported as `bool`; failure
// details land in the error slot of the mutated kind.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use coinly_api::{CatalogClient, TransportConfig};

use crate::command::Command;
use crate::command::requests::{
    CreateCoinRequest, CreateCollectionRequest, CreateGroupRequest, UpdateCoinRequest,
    UpdateCollectionRequest, UpdateGroupRequest,
};
use crate::config::CatalogConfig;
use crate::error::CoreError;
use crate::gateway::EntityGateway;
use crate::model::{Coin, Collection, Entity, EntityId, EntityKind, Group};
use crate::store::CatalogStore;

// ── CatalogState ─────────────────────────────────────────────────

/// Lifecycle of the initial bulk load, observable by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CatalogState {
    Empty,
    Loading,
    Ready,
    Failed,
}

// ── Reparenting ──────────────────────────────────────────────────

/// Parents to refresh after an entity's parent reference went from
/// `old` to `new`.
///
/// Both present and different: both, old first. Equal: once. Only one
/// present: that one. Neither: nothing.
pub fn reparent_targets(old: Option<&EntityId>, new: Option<&EntityId>) -> Vec<EntityId> {
    match (old, new) {
        (Some(old), Some(new)) if old == new => vec![new.clone()],
        (Some(old), Some(new)) => vec![old.clone(), new.clone()],
        (Some(only), None) | (None, Some(only)) => vec![only.clone()],
        (None, None) => Vec::new(),
    }
}

// ── Catalog ──────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<CatalogInner>`. Owns the store and the
/// injected gateway; no other component writes to the stores.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    store: Arc<CatalogStore>,
    gateway: Arc<dyn EntityGateway>,
    state: watch::Sender<CatalogState>,
}

impl Catalog {
    /// Create an empty catalog around `gateway`. Nothing is fetched
    /// until [`init`](Self::init) or [`load_groups`](Self::load_groups).
    pub fn new(gateway: Arc<dyn EntityGateway>) -> Self {
        let (state, _) = watch::channel(CatalogState::Empty);
        Self {
            inner: Arc::new(CatalogInner {
                store: Arc::new(CatalogStore::new()),
                gateway,
                state,
            }),
        }
    }

    /// Create a catalog backed by the HTTP client described by `config`.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = CatalogClient::new(config.url.clone(), &transport)?;
        debug!(url = %config.url, timeout = ?config.timeout, "catalog client ready");
        Ok(Self::new(Arc::new(client)))
    }

    /// Read-only access to the stores.
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.inner.store
    }

    /// Subscribe to lifecycle state changes.
    pub fn state(&self) -> watch::Receiver<CatalogState> {
        self.inner.state.subscribe()
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Perform the initial bulk load.
    ///
    /// Moves the state through `Loading` to `Ready` or `Failed`. The
    /// failure is also recorded in the group error slot.
    pub async fn init(&self) -> Result<(), CoreError> {
        self.inner.state.send_replace(CatalogState::Loading);
        self.store().clear_error(EntityKind::Group);

        match self.fetch_group_tree().await {
            Ok(()) => {
                self.inner.state.send_replace(CatalogState::Ready);
                Ok(())
            }
            Err(e) => {
                self.record_failure(EntityKind::Group, "load", &e);
                self.inner.state.send_replace(CatalogState::Failed);
                Err(e)
            }
        }
    }

    /// Drop all cached entities and error messages.
    pub fn reset(&self) {
        self.store().clear_all();
        self.inner.state.send_replace(CatalogState::Empty);
        debug!("catalog reset");
    }

    // ── Command execution ────────────────────────────────────────

    /// Run one command. Returns the entry point's outcome.
    pub async fn execute(&self, cmd: Command) -> bool {
        match cmd {
            Command::LoadGroups => self.load_groups().await,
            Command::LoadGroup { id } => self.load_group(&id).await,
            Command::CreateGroup(req) => self.create_group(&req).await,
            Command::UpdateGroup { id, update } => self.update_group(&id, &update).await,
            Command::DeleteGroup { id } => self.delete_group(&id).await,
            Command::CreateCollection(req) => self.create_collection(&req).await,
            Command::UpdateCollection { id, update } => {
                self.update_collection(&id, &update).await
            }
            Command::DeleteCollection { id } => self.delete_collection(&id).await,
            Command::CreateCoin(req) => self.create_coin(&req).await,
            Command::UpdateCoin { id, update } => self.update_coin(&id, &update).await,
            Command::DeleteCoin { id } => self.delete_coin(&id).await,
        }
    }

    // ── Bulk loading ─────────────────────────────────────────────

    /// Fetch the complete group tree and replace all three stores.
    pub async fn load_groups(&self) -> bool {
        self.store().clear_error(EntityKind::Group);
        match self.fetch_group_tree().await {
            Ok(()) => true,
            Err(e) => {
                self.record_failure(EntityKind::Group, "load", &e);
                false
            }
        }
    }

    /// Re-fetch one group and merge it into the group store.
    ///
    /// Nested collections are not flattened into the collection store.
    pub async fn load_group(&self, id: &EntityId) -> bool {
        self.store().clear_error(EntityKind::Group);
        self.refresh_group(id).await
    }

    // ── Cache-first resolution ───────────────────────────────────

    /// Cached coin, or fetch and cache it. `None` on any failure.
    pub async fn resolve_coin(&self, id: &EntityId) -> Option<Arc<Coin>> {
        if let Some(coin) = self.store().coin_by_id(id) {
            return Some(coin);
        }
        match self.inner.gateway.get_coin(id).await {
            Ok(coin) => {
                self.store().coins.upsert(coin);
                self.store().coins.get(id)
            }
            Err(e) => {
                debug!(%id, error = %e, "coin not resolvable");
                None
            }
        }
    }

    /// Cached collection, or fetch and cache it. `None` on any failure.
    pub async fn resolve_collection(&self, id: &EntityId) -> Option<Arc<Collection>> {
        if let Some(collection) = self.store().collection_by_id(id) {
            return Some(collection);
        }
        match self.inner.gateway.get_collection(id).await {
            Ok(collection) => {
                self.store().collections.upsert(collection);
                self.store().collections.get(id)
            }
            Err(e) => {
                debug!(%id, error = %e, "collection not resolvable");
                None
            }
        }
    }

    // ── Group mutations ──────────────────────────────────────────

    /// Create a group, then resync every store from the new group list.
    pub async fn create_group(&self, req: &CreateGroupRequest) -> bool {
        self.store().clear_error(EntityKind::Group);
        match self.inner.gateway.create_group(req).await {
            Ok(created) => {
                debug!(id = %created.id, "group created");
                let mut groups = self.cached_groups();
                groups.push(created);
                self.store().apply_group_tree(groups);
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Group, "create", &e);
                false
            }
        }
    }

    /// Update a group, merge the result into the group list, then resync.
    pub async fn update_group(&self, id: &EntityId, req: &UpdateGroupRequest) -> bool {
        self.store().clear_error(EntityKind::Group);
        match self.inner.gateway.update_group(id, req).await {
            Ok(updated) => {
                debug!(%id, "group updated");
                let mut groups = self.cached_groups();
                if let Some(existing) = groups.iter_mut().find(|g| g.id == updated.id) {
                    existing.merge(updated);
                } else {
                    groups.push(updated);
                }
                self.store().apply_group_tree(groups);
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Group, "update", &e);
                false
            }
        }
    }

    /// Delete a group, drop it from the group list, then resync.
    pub async fn delete_group(&self, id: &EntityId) -> bool {
        self.store().clear_error(EntityKind::Group);
        match self.inner.gateway.delete_group(id).await {
            Ok(()) => {
                debug!(%id, "group deleted");
                let groups = self
                    .cached_groups()
                    .into_iter()
                    .filter(|g| &g.id != id)
                    .collect();
                self.store().apply_group_tree(groups);
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Group, "delete", &e);
                false
            }
        }
    }

    // ── Collection mutations ─────────────────────────────────────

    pub async fn create_collection(&self, req: &CreateCollectionRequest) -> bool {
        self.store().clear_error(EntityKind::Collection);
        match self.inner.gateway.create_collection(req).await {
            Ok(created) => {
                let parent = created.group_id.clone();
                debug!(id = %created.id, "collection created");
                self.store().collections.upsert(created);
                if let Some(group_id) = parent {
                    self.refresh_group(&group_id).await;
                }
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Collection, "create", &e);
                false
            }
        }
    }

    /// Update a collection. Moving it between groups refreshes both.
    pub async fn update_collection(&self, id: &EntityId, req: &UpdateCollectionRequest) -> bool {
        self.store().clear_error(EntityKind::Collection);
        let old_parent = self.store().collection_by_id(id).and_then(|c| c.group_id.clone());

        match self.inner.gateway.update_collection(id, req).await {
            Ok(updated) => {
                let stored_id = updated.id.clone();
                self.store().collections.upsert(updated);
                let new_parent = self
                    .store()
                    .collections
                    .get(&stored_id)
                    .and_then(|c| c.group_id.clone());
                for group_id in reparent_targets(old_parent.as_ref(), new_parent.as_ref()) {
                    self.refresh_group(&group_id).await;
                }
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Collection, "update", &e);
                false
            }
        }
    }

    pub async fn delete_collection(&self, id: &EntityId) -> bool {
        self.store().clear_error(EntityKind::Collection);
        let parent = self.store().collection_by_id(id).and_then(|c| c.group_id.clone());

        match self.inner.gateway.delete_collection(id).await {
            Ok(()) => {
                self.store().collections.remove(id);
                if let Some(group_id) = parent {
                    self.refresh_group(&group_id).await;
                } else {
                    debug!(%id, "deleted collection was not cached; no parent to refresh");
                }
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Collection, "delete", &e);
                false
            }
        }
    }

    // ── Coin mutations ───────────────────────────────────────────

    pub async fn create_coin(&self, req: &CreateCoinRequest) -> bool {
        self.store().clear_error(EntityKind::Coin);
        match self.inner.gateway.create_coin(req).await {
            Ok(created) => {
                let parent = created.collection_id.clone();
                debug!(id = %created.id, "coin created");
                self.store().coins.upsert(created);
                if let Some(collection_id) = parent {
                    self.refresh_collection(&collection_id).await;
                }
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Coin, "create", &e);
                false
            }
        }
    }

    /// Update a coin. Moving it between collections refreshes both.
    ///
    /// Groups are not refreshed, even when the two collections belong
    /// to different groups; the next full load reconciles them.
    pub async fn update_coin(&self, id: &EntityId, req: &UpdateCoinRequest) -> bool {
        self.store().clear_error(EntityKind::Coin);
        let old_parent = self.store().coin_by_id(id).and_then(|c| c.collection_id.clone());

        match self.inner.gateway.update_coin(id, req).await {
            Ok(updated) => {
                let stored_id = updated.id.clone();
                self.store().coins.upsert(updated);
                let new_parent = self
                    .store()
                    .coins
                    .get(&stored_id)
                    .and_then(|c| c.collection_id.clone());
                for collection_id in reparent_targets(old_parent.as_ref(), new_parent.as_ref()) {
                    self.refresh_collection(&collection_id).await;
                }
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Coin, "update", &e);
                false
            }
        }
    }

    /// Delete a coin and refresh its collection.
    ///
    /// The parent is taken from the cache; an uncached coin has no
    /// known parent and triggers no refresh.
    pub async fn delete_coin(&self, id: &EntityId) -> bool {
        self.store().clear_error(EntityKind::Coin);
        let parent = self.store().coin_by_id(id).and_then(|c| c.collection_id.clone());

        match self.inner.gateway.delete_coin(id).await {
            Ok(()) => {
                self.store().coins.remove(id);
                if let Some(collection_id) = parent {
                    self.refresh_collection(&collection_id).await;
                } else {
                    debug!(%id, "deleted coin was not cached; no parent to refresh");
                }
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Coin, "delete", &e);
                false
            }
        }
    }

    // ── Private helpers ──────────────────────────────────────────

    async fn fetch_group_tree(&self) -> Result<(), CoreError> {
        let groups = self.inner.gateway.list_groups().await?;
        info!(count = groups.len(), "group tree loaded");
        self.store().apply_group_tree(groups);
        Ok(())
    }

    /// Owned copies of every cached group.
    fn cached_groups(&self) -> Vec<Group> {
        self.store()
            .groups_snapshot()
            .iter()
            .map(|g| g.as_ref().clone())
            .collect()
    }

    /// Re-fetch a group after one of its collections changed. A failure
    /// is logged and recorded but does not fail the caller.
    async fn refresh_group(&self, id: &EntityId) -> bool {
        debug!(%id, "refreshing group");
        match self.inner.gateway.get_group(id).await {
            Ok(group) => {
                self.store().groups.upsert(group);
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Group, "refresh", &e);
                false
            }
        }
    }

    /// Re-fetch a collection after one of its coins changed.
    async fn refresh_collection(&self, id: &EntityId) -> bool {
        debug!(%id, "refreshing collection");
        match self.inner.gateway.get_collection(id).await {
            Ok(collection) => {
                self.store().collections.upsert(collection);
                true
            }
            Err(e) => {
                self.record_failure(EntityKind::Collection, "refresh", &e);
                false
            }
        }
    }

    fn record_failure(&self, kind: EntityKind, verb: &str, error: &CoreError) {
        warn!(%kind, verb, error = %error, "catalog operation failed");
        self.store()
            .set_error(kind, format!("Failed to {verb} {kind}: {error}"));
    }
}
