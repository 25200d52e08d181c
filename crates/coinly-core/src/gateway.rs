// ── Remote entity gateway ──
//
// The cache's only view of the server. `Catalog` holds an
// `Arc<dyn EntityGateway>`; production code plugs in the HTTP client,
// tests plug in an in-memory double.

use async_trait::async_trait;
use tracing::debug;

use coinly_api::CatalogClient;

use crate::command::requests::{
    CreateCoinRequest, CreateCollectionRequest, CreateGroupRequest, UpdateCoinRequest,
    UpdateCollectionRequest, UpdateGroupRequest,
};
use crate::convert::group_from_metadata;
use crate::error::CoreError;
use crate::model::{Coin, Collection, EntityId, Group};

/// Asynchronous CRUD over the three entity kinds.
#[async_trait]
pub trait EntityGateway: Send + Sync {
    // ── Groups ───────────────────────────────────────────────────────
    async fn list_groups(&self) -> Result<Vec<Group>, CoreError>;
    async fn get_group(&self, id: &EntityId) -> Result<Group, CoreError>;
    async fn create_group(&self, req: &CreateGroupRequest) -> Result<Group, CoreError>;
    /// The returned group may omit its nested collections.
    async fn update_group(
        &self,
        id: &EntityId,
        req: &UpdateGroupRequest,
    ) -> Result<Group, CoreError>;
    async fn delete_group(&self, id: &EntityId) -> Result<(), CoreError>;

    // ── Collections ──────────────────────────────────────────────────
    async fn get_collection(&self, id: &EntityId) -> Result<Collection, CoreError>;
    async fn create_collection(
        &self,
        req: &CreateCollectionRequest,
    ) -> Result<Collection, CoreError>;
    async fn update_collection(
        &self,
        id: &EntityId,
        req: &UpdateCollectionRequest,
    ) -> Result<Collection, CoreError>;
    async fn delete_collection(&self, id: &EntityId) -> Result<(), CoreError>;

    // ── Coins ────────────────────────────────────────────────────────
    async fn get_coin(&self, id: &EntityId) -> Result<Coin, CoreError>;
    async fn create_coin(&self, req: &CreateCoinRequest) -> Result<Coin, CoreError>;
    async fn update_coin(&self, id: &EntityId, req: &UpdateCoinRequest)
    -> Result<Coin, CoreError>;
    async fn delete_coin(&self, id: &EntityId) -> Result<(), CoreError>;
}

// ── HTTP implementation ────────────────────────────────────────────

#[async_trait]
impl EntityGateway for CatalogClient {
    async fn list_groups(&self) -> Result<Vec<Group>, CoreError> {
        let groups = CatalogClient::list_groups(self).await?;
        debug!(count = groups.len(), "fetched group tree");
        Ok(groups.into_iter().map(Group::from).collect())
    }

    async fn get_group(&self, id: &EntityId) -> Result<Group, CoreError> {
        Ok(CatalogClient::get_group(self, id.as_str()).await?.into())
    }

    async fn create_group(&self, req: &CreateGroupRequest) -> Result<Group, CoreError> {
        Ok(CatalogClient::create_group(self, &req.into()).await?.into())
    }

    async fn update_group(
        &self,
        id: &EntityId,
        req: &UpdateGroupRequest,
    ) -> Result<Group, CoreError> {
        let meta = CatalogClient::update_group(self, id.as_str(), &req.into()).await?;
        Ok(group_from_metadata(id, meta))
    }

    async fn delete_group(&self, id: &EntityId) -> Result<(), CoreError> {
        Ok(CatalogClient::delete_group(self, id.as_str()).await?)
    }

    async fn get_collection(&self, id: &EntityId) -> Result<Collection, CoreError> {
        Ok(CatalogClient::get_collection(self, id.as_str())
            .await?
            .into())
    }

    async fn create_collection(
        &self,
        req: &CreateCollectionRequest,
    ) -> Result<Collection, CoreError> {
        Ok(CatalogClient::create_collection(self, &req.into())
            .await?
            .into())
    }

    async fn update_collection(
        &self,
        id: &EntityId,
        req: &UpdateCollectionRequest,
    ) -> Result<Collection, CoreError> {
        Ok(
            CatalogClient::update_collection(self, id.as_str(), &req.into())
                .await?
                .into(),
        )
    }

    async fn delete_collection(&self, id: &EntityId) -> Result<(), CoreError> {
        Ok(CatalogClient::delete_collection(self, id.as_str()).await?)
    }

    async fn get_coin(&self, id: &EntityId) -> Result<Coin, CoreError> {
        Ok(CatalogClient::get_coin(self, id.as_str()).await?.into())
    }

    async fn create_coin(&self, req: &CreateCoinRequest) -> Result<Coin, CoreError> {
        Ok(CatalogClient::create_coin(self, &req.into()).await?.into())
    }

    async fn update_coin(
        &self,
        id: &EntityId,
        req: &UpdateCoinRequest,
    ) -> Result<Coin, CoreError> {
        Ok(
            CatalogClient::update_coin(self, id.as_str(), &req.into())
                .await?
                .into(),
        )
    }

    async fn delete_coin(&self, id: &EntityId) -> Result<(), CoreError> {
        Ok(CatalogClient::delete_coin(self, id.as_str()).await?)
    }
}
