// ── Group domain type ──

use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::entity_id::EntityId;
use super::{Entity, EntityKind};

/// Top-level grouping of collections (typically one per country).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: EntityId,
    pub name: String,
    /// `None` when the payload did not include the nested list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<Collection>>,
}

impl Group {
    /// Nested collections, empty when absent.
    pub fn collections(&self) -> &[Collection] {
        self.collections.as_deref().unwrap_or_default()
    }
}

impl Entity for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn merge(&mut self, incoming: Self) {
        self.name = incoming.name;
        if incoming.collections.is_some() {
            self.collections = incoming.collections;
        }
    }
}
