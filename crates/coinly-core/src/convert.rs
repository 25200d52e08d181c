// ── API-to-domain type conversions ──
//
// Bridges `coinly_api` wire types and `coinly_core` domain types in both
// directions. Absent aggregates stay absent; nothing is filled in from
// context.

use coinly_api::{
    CoinResponse, CollectionResponse, CreateCoinPayload, CreateCollectionPayload,
    CreateGroupPayload, GroupMetadata, GroupResponse, UpdateCoinPayload, UpdateCollectionPayload,
    UpdateGroupPayload,
};

use crate::command::requests::{
    CreateCoinRequest, CreateCollectionRequest, CreateGroupRequest, UpdateCoinRequest,
    UpdateCollectionRequest, UpdateGroupRequest,
};
use crate::model::{Coin, Collection, EntityId, Group};

// ── Responses → domain ─────────────────────────────────────────────

impl From<GroupResponse> for Group {
    fn from(g: GroupResponse) -> Self {
        Self {
            id: EntityId::from(g.id),
            name: g.name,
            collections: g
                .collections
                .map(|cs| cs.into_iter().map(Collection::from).collect()),
        }
    }
}

impl From<CollectionResponse> for Collection {
    fn from(c: CollectionResponse) -> Self {
        Self {
            id: EntityId::from(c.id),
            name: c.name,
            group_id: c.group_id.map(EntityId::from),
            coins: c.coins.map(|ks| ks.into_iter().map(Coin::from).collect()),
        }
    }
}

impl From<CoinResponse> for Coin {
    fn from(k: CoinResponse) -> Self {
        Self {
            id: EntityId::from(k.id),
            value: k.value,
            country: k.country,
            year: k.year,
            mint: k.mint.filter(|m| !m.is_empty()),
            description: k.description.unwrap_or_default(),
            collection_id: k.collection_id.map(EntityId::from),
        }
    }
}

/// The group PATCH answers with metadata only. The result carries no
/// nested list so a merge keeps the cached one.
pub(crate) fn group_from_metadata(id: &EntityId, meta: GroupMetadata) -> Group {
    Group {
        id: id.clone(),
        name: meta.name,
        collections: None,
    }
}

// ── Requests → payloads ────────────────────────────────────────────

fn ids_to_strings(ids: &[EntityId]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

impl From<&CreateGroupRequest> for CreateGroupPayload {
    fn from(r: &CreateGroupRequest) -> Self {
        Self {
            name: r.name.clone(),
            collections: ids_to_strings(&r.collections),
        }
    }
}

impl From<&UpdateGroupRequest> for UpdateGroupPayload {
    fn from(r: &UpdateGroupRequest) -> Self {
        Self {
            name: r.name.clone(),
        }
    }
}

impl From<&CreateCollectionRequest> for CreateCollectionPayload {
    fn from(r: &CreateCollectionRequest) -> Self {
        Self {
            name: r.name.clone(),
            group_id: r.group_id.to_string(),
            coins: ids_to_strings(&r.coins),
        }
    }
}

impl From<&UpdateCollectionRequest> for UpdateCollectionPayload {
    fn from(r: &UpdateCollectionRequest) -> Self {
        Self {
            name: r.name.clone(),
            group_id: r.group_id.as_ref().map(ToString::to_string),
        }
    }
}

impl From<&CreateCoinRequest> for CreateCoinPayload {
    fn from(r: &CreateCoinRequest) -> Self {
        Self {
            year: r.year,
            value: r.value,
            country: r.country.clone(),
            collection_id: r.collection_id.to_string(),
            mint: r.mint.clone(),
            description: r.description.clone(),
        }
    }
}

impl From<&UpdateCoinRequest> for UpdateCoinPayload {
    fn from(r: &UpdateCoinRequest) -> Self {
        Self {
            year: r.year,
            value: r.value,
            country: r.country.clone(),
            collection_id: r.collection_id.as_ref().map(ToString::to_string),
            mint: r.mint.clone(),
            description: r.description.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn nested_group_keeps_absent_and_empty_distinct() {
        let g = Group::from(GroupResponse {
            id: "g1".into(),
            name: "Germany".into(),
            collections: Some(vec![CollectionResponse {
                id: "c1".into(),
                name: "2 Euro".into(),
                group_id: Some("g1".into()),
                coins: None,
            }]),
        });

        let c = &g.collections()[0];
        assert_eq!(c.group_id, Some(EntityId::from("g1")));
        assert!(c.coins.is_none());
    }

    #[test]
    fn empty_mint_is_treated_as_absent() {
        let coin = Coin::from(CoinResponse {
            id: "k1".into(),
            value: 10,
            country: "NL".into(),
            year: 2014,
            mint: Some(String::new()),
            description: None,
            collection_id: None,
        });
        assert!(coin.mint.is_none());
        assert_eq!(coin.description, "");
    }

    #[test]
    fn update_coin_request_maps_only_set_fields() {
        let payload = UpdateCoinPayload::from(&UpdateCoinRequest {
            collection_id: Some(EntityId::from("c2")),
            ..UpdateCoinRequest::default()
        });
        assert_eq!(payload.collection_id.as_deref(), Some("c2"));
        assert!(payload.year.is_none());
    }

    #[test]
    fn group_metadata_yields_group_without_collections() {
        let g = group_from_metadata(
            &EntityId::from("g1"),
            GroupMetadata {
                name: "Renamed".into(),
            },
        );
        assert_eq!(g.name, "Renamed");
        assert!(g.collections.is_none());
    }
}
