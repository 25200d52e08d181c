// ── Reactive entity stores ──

mod catalog_store;
mod entity_store;
mod projector;
mod resync;

pub use catalog_store::CatalogStore;
pub use entity_store::{EntityStore, StoreObserver};
pub use projector::IndexProjector;
pub use resync::flatten_groups;
