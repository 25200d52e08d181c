// Wire types for the catalog REST API.
//
// Field names follow the server's camelCase JSON. Nested aggregates and
// back-references are optional: a response that omits them is distinct
// from one that reports them empty.

use serde::{Deserialize, Serialize};

// ── Responses ───────────────────────────────────────────────────────

/// A group as returned by `GET /api/groups[/{id}]` and `POST /api/groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub collections: Option<Vec<CollectionResponse>>,
}

/// Answer to `PATCH /api/groups/{id}`: only the updated metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMetadata {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub coins: Option<Vec<CoinResponse>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinResponse {
    pub id: String,
    /// Face value in euro cents.
    pub value: u32,
    /// ISO country code of the issuing country.
    pub country: String,
    pub year: i32,
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
}

// ── Request payloads ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CreateGroupPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateGroupPayload {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionPayload {
    pub name: String,
    pub group_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coins: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinPayload {
    pub year: i32,
    pub value: u32,
    pub country: String,
    pub collection_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoinPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
