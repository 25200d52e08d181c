// ── Typed request structs for Command payloads ──

use serde::{Deserialize, Serialize};

use crate::model::EntityId;

// ── Group ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    /// Existing collections to move into the new group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<EntityId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: String,
}

// ── Collection ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    pub name: String,
    pub group_id: EntityId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coins: Vec<EntityId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Setting this moves the collection to another group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<EntityId>,
}

// ── Coin ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinRequest {
    pub year: i32,
    /// Face value in euro cents.
    pub value: u32,
    pub country: String,
    pub collection_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoinRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Setting this moves the coin to another collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
