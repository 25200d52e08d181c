// coinly-core: Hierarchical entity cache between coinly-api and consumers.
//
// Groups, collections and coins live in one reactive store per kind.
// The `Catalog` applies confirmed mutations and re-fetches the parents
// they affect, so nested and flat views converge without a full reload.

pub mod catalog;
pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod gateway;
pub mod model;
pub mod selection;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{Catalog, CatalogState, reparent_targets};
pub use command::Command;
pub use command::requests::*;
pub use config::CatalogConfig;
pub use error::CoreError;
pub use gateway::EntityGateway;
pub use selection::{ResolvedSelection, Selection, SelectionState};
pub use store::{CatalogStore, EntityStore, IndexProjector, StoreObserver};
pub use stream::EntityStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{Coin, Collection, Entity, EntityId, EntityKind, Group};
