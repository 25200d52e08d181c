// ── Index projector ──
//
// Derived id → entity lookup table kept in lockstep with one store.
// The table is rebuilt from the full snapshot on every notification
// and published atomically through `ArcSwap`.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;

use super::entity_store::{EntityStore, StoreObserver};
use crate::model::{Entity, EntityId};

pub struct IndexProjector<T: Entity> {
    index: ArcSwap<HashMap<EntityId, Arc<T>>>,
    recomputes: AtomicU64,
}

impl<T: Entity> IndexProjector<T> {
    /// Build a projector seeded from `store` and subscribe it to every
    /// later change.
    pub fn attach(store: &EntityStore<T>) -> Arc<Self> {
        let projector = Arc::new(Self {
            index: ArcSwap::from_pointee(build_index(&store.snapshot())),
            recomputes: AtomicU64::new(0),
        });
        store.observe(Arc::clone(&projector) as Arc<dyn StoreObserver<T>>);
        projector
    }

    pub fn lookup(&self, id: &EntityId) -> Option<Arc<T>> {
        self.index.load().get(id).cloned()
    }

    /// How many times the table has been rebuilt since attachment.
    #[allow(dead_code)]
    pub(crate) fn recompute_count(&self) -> u64 {
        self.recomputes.load(Ordering::Relaxed)
    }
}

impl<T: Entity> StoreObserver<T> for IndexProjector<T> {
    fn on_change(&self, entities: &Arc<Vec<Arc<T>>>) {
        self.index.store(Arc::new(build_index(entities)));
        self.recomputes.fetch_add(1, Ordering::Relaxed);
    }
}

fn build_index<T: Entity>(entities: &[Arc<T>]) -> HashMap<EntityId, Arc<T>> {
    entities
        .iter()
        .map(|e| (e.id().clone(), Arc::clone(e)))
        .collect()
}
