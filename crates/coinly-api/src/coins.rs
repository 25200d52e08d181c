// Coin endpoints
//
// Coins are the leaves. Each carries a `collectionId` back-reference;
// moving a coin is a PATCH of that field.

use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{CoinResponse, CreateCoinPayload, UpdateCoinPayload};

impl CatalogClient {
    /// `GET /api/coins`
    pub async fn list_coins(&self) -> Result<Vec<CoinResponse>, Error> {
        let url = self.resource_url("coins", None)?;
        debug!("listing coins");
        self.get(url).await
    }

    /// `GET /api/coins/{id}`
    pub async fn get_coin(&self, id: &str) -> Result<CoinResponse, Error> {
        let url = self.resource_url("coins", Some(id))?;
        self.get(url).await
    }

    /// `POST /api/coins`
    pub async fn create_coin(&self, payload: &CreateCoinPayload) -> Result<CoinResponse, Error> {
        let url = self.resource_url("coins", None)?;
        debug!(collection = %payload.collection_id, "creating coin");
        self.post(url, payload).await
    }

    /// `PATCH /api/coins/{id}`
    pub async fn update_coin(
        &self,
        id: &str,
        payload: &UpdateCoinPayload,
    ) -> Result<CoinResponse, Error> {
        let url = self.resource_url("coins", Some(id))?;
        debug!(id, "updating coin");
        self.patch(url, payload).await
    }

    /// `DELETE /api/coins/{id}`
    pub async fn delete_coin(&self, id: &str) -> Result<(), Error> {
        let url = self.resource_url("coins", Some(id))?;
        debug!(id, "deleting coin");
        self.delete(url).await
    }
}
