// ── Command API ──
//
// Every cache entry point can be driven through one `Command` enum.
// `Catalog::execute` routes each variant to its cascade.

pub mod requests;

use crate::model::{EntityId, EntityKind};

pub use requests::{
    CreateCoinRequest, CreateCollectionRequest, CreateGroupRequest, UpdateCoinRequest,
    UpdateCollectionRequest, UpdateGroupRequest,
};

/// All operations that change the cache.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Loading ──────────────────────────────────────────────────────
    LoadGroups,
    LoadGroup { id: EntityId },

    // ── Group CRUD ───────────────────────────────────────────────────
    CreateGroup(CreateGroupRequest),
    UpdateGroup {
        id: EntityId,
        update: UpdateGroupRequest,
    },
    DeleteGroup { id: EntityId },

    // ── Collection CRUD ──────────────────────────────────────────────
    CreateCollection(CreateCollectionRequest),
    UpdateCollection {
        id: EntityId,
        update: UpdateCollectionRequest,
    },
    DeleteCollection { id: EntityId },

    // ── Coin CRUD ────────────────────────────────────────────────────
    CreateCoin(CreateCoinRequest),
    UpdateCoin {
        id: EntityId,
        update: UpdateCoinRequest,
    },
    DeleteCoin { id: EntityId },
}

impl Command {
    /// The entity kind whose error slot reports this command's failure.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::LoadGroups
            | Self::LoadGroup { .. }
            | Self::CreateGroup(_)
            | Self::UpdateGroup { .. }
            | Self::DeleteGroup { .. } => EntityKind::Group,
            Self::CreateCollection(_)
            | Self::UpdateCollection { .. }
            | Self::DeleteCollection { .. } => EntityKind::Collection,
            Self::CreateCoin(_) | Self::UpdateCoin { .. } | Self::DeleteCoin { .. } => {
                EntityKind::Coin
            }
        }
    }
}
