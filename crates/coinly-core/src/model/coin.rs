// ── Coin domain type ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use super::{Entity, EntityKind};

/// A single coin. Leaf of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: EntityId,
    /// Face value in euro cents (1, 2, 5, 10, 20, 50, 100, 200).
    pub value: u32,
    /// ISO country code.
    pub country: String,
    pub year: i32,
    /// Mint mark. Only German coins carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Owning collection. Changes when the coin is moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<EntityId>,
}

impl Entity for Coin {
    const KIND: EntityKind = EntityKind::Coin;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn merge(&mut self, incoming: Self) {
        self.value = incoming.value;
        self.country = incoming.country;
        self.year = incoming.year;
        self.mint = incoming.mint;
        self.description = incoming.description;
        if incoming.collection_id.is_some() {
            self.collection_id = incoming.collection_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(collection: Option<&str>) -> Coin {
        Coin {
            id: EntityId::from("k1"),
            value: 200,
            country: "DE".into(),
            year: 2006,
            mint: Some("A".into()),
            description: "Holstentor".into(),
            collection_id: collection.map(EntityId::from),
        }
    }

    #[test]
    fn merge_overwrites_attributes_and_keeps_absent_parent() {
        let mut cached = coin(Some("c1"));
        let mut incoming = coin(None);
        incoming.year = 2007;
        incoming.mint = None;

        cached.merge(incoming);

        assert_eq!(cached.year, 2007);
        assert!(cached.mint.is_none());
        assert_eq!(cached.collection_id, Some(EntityId::from("c1")));
    }

    #[test]
    fn merge_moves_parent_when_incoming_has_one() {
        let mut cached = coin(Some("c1"));
        cached.merge(coin(Some("c2")));
        assert_eq!(cached.collection_id, Some(EntityId::from("c2")));
    }
}
