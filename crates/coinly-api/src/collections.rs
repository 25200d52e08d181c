// Collection endpoints

use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{CollectionResponse, CreateCollectionPayload, UpdateCollectionPayload};

impl CatalogClient {
    /// `GET /api/collections`
    pub async fn list_collections(&self) -> Result<Vec<CollectionResponse>, Error> {
        let url = self.resource_url("collections", None)?;
        debug!("listing collections");
        self.get(url).await
    }

    /// Fetch one collection with its coins.
    ///
    /// `GET /api/collections/{id}`
    pub async fn get_collection(&self, id: &str) -> Result<CollectionResponse, Error> {
        let url = self.resource_url("collections", Some(id))?;
        self.get(url).await
    }

    /// `POST /api/collections`
    pub async fn create_collection(
        &self,
        payload: &CreateCollectionPayload,
    ) -> Result<CollectionResponse, Error> {
        let url = self.resource_url("collections", None)?;
        debug!(name = %payload.name, group = %payload.group_id, "creating collection");
        self.post(url, payload).await
    }

    /// Update a collection. Setting `group_id` moves it to another group.
    ///
    /// `PATCH /api/collections/{id}`
    pub async fn update_collection(
        &self,
        id: &str,
        payload: &UpdateCollectionPayload,
    ) -> Result<CollectionResponse, Error> {
        let url = self.resource_url("collections", Some(id))?;
        debug!(id, "updating collection");
        self.patch(url, payload).await
    }

    /// `DELETE /api/collections/{id}`
    pub async fn delete_collection(&self, id: &str) -> Result<(), Error> {
        let url = self.resource_url("collections", Some(id))?;
        debug!(id, "deleting collection");
        self.delete(url).await
    }
}
