// ── Generic reactive entity store ──
//
// Concurrent keyed storage with O(1) lookups and push-based change
// notification. Every mutation notifies synchronously: registered
// observers run inline, then the `watch` snapshot is replaced.

use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::watch;

use crate::model::{Entity, EntityId};

/// Synchronous change listener attached to an [`EntityStore`].
///
/// Called once per store mutation with the complete post-mutation
/// contents, before the `watch` snapshot is published.
pub trait StoreObserver<T>: Send + Sync {
    fn on_change(&self, entities: &Arc<Vec<Arc<T>>>);
}

/// Authoritative in-memory set of one entity kind, keyed by id.
pub struct EntityStore<T: Entity> {
    by_id: DashMap<EntityId, Arc<T>>,

    /// Bumped once per notification.
    version: watch::Sender<u64>,

    /// Full snapshot, rebuilt on mutation for cheap subscription.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,

    observers: ArcSwap<Vec<Arc<dyn StoreObserver<T>>>>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            by_id: DashMap::new(),
            version,
            snapshot,
            observers: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Replace the whole contents with `entities` in one step.
    ///
    /// Incoming entities are written first, then ids absent from the
    /// input are pruned, then subscribers are notified once. When an id
    /// appears twice the later entry wins.
    pub fn replace_all(&self, entities: Vec<T>) {
        let mut incoming: HashSet<EntityId> = HashSet::with_capacity(entities.len());
        for entity in entities {
            let id = entity.id().clone();
            incoming.insert(id.clone());
            self.by_id.insert(id, Arc::new(entity));
        }
        self.by_id.retain(|id, _| incoming.contains(id));
        self.notify();
    }

    /// Insert or shallow-merge an entity. Returns `true` if the id was new.
    pub fn upsert(&self, entity: T) -> bool {
        let is_new = match self.by_id.entry(entity.id().clone()) {
            Entry::Occupied(mut slot) => {
                let mut merged = T::clone(slot.get());
                merged.merge(entity);
                slot.insert(Arc::new(merged));
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(entity));
                true
            }
        };
        self.notify();
        is_new
    }

    /// Remove an entity. Absent ids are a silent no-op.
    pub fn remove(&self, id: &EntityId) -> Option<Arc<T>> {
        let removed = self.by_id.remove(id).map(|(_, v)| v);
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    pub fn get(&self, id: &EntityId) -> Option<Arc<T>> {
        self.by_id.get(id).map(|r| Arc::clone(r.value()))
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    /// Register a synchronous observer for every future mutation.
    pub fn observe(&self, observer: Arc<dyn StoreObserver<T>>) {
        self.observers.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(Arc::clone(&observer));
            next
        });
    }

    /// Number of notifications emitted so far.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.by_id.iter().map(|r| r.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&self) {
        self.by_id.clear();
        self.notify();
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn notify(&self) {
        let values: Vec<Arc<T>> = self.by_id.iter().map(|r| Arc::clone(r.value())).collect();
        let snapshot = Arc::new(values);
        for observer in self.observers.load().iter() {
            observer.on_change(&snapshot);
        }
        // `send_replace` stores the value even with zero receivers.
        self.snapshot.send_replace(snapshot);
        self.version.send_modify(|v| *v += 1);
    }
}
