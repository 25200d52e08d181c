// ── Collection domain type ──

use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::entity_id::EntityId;
use super::{Entity, EntityKind};

/// A named set of coins inside a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: EntityId,
    pub name: String,
    /// Parent group. Non-owning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coins: Option<Vec<Coin>>,
}

impl Collection {
    /// Nested coins, empty when absent.
    pub fn coins(&self) -> &[Coin] {
        self.coins.as_deref().unwrap_or_default()
    }
}

impl Entity for Collection {
    const KIND: EntityKind = EntityKind::Collection;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn merge(&mut self, incoming: Self) {
        self.name = incoming.name;
        if incoming.group_id.is_some() {
            self.group_id = incoming.group_id;
        }
        if incoming.coins.is_some() {
            self.coins = incoming.coins;
        }
    }
}
