// Group endpoints
//
// Groups are the top of the hierarchy. List and detail responses embed
// the full collection tree; an update answers with metadata only.

use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;
use crate::models::{CreateGroupPayload, GroupMetadata, GroupResponse, UpdateGroupPayload};

impl CatalogClient {
    /// List every group with its nested collections and coins.
    ///
    /// `GET /api/groups`
    pub async fn list_groups(&self) -> Result<Vec<GroupResponse>, Error> {
        let url = self.resource_url("groups", None)?;
        debug!("listing groups");
        self.get(url).await
    }

    /// `GET /api/groups/{id}`
    pub async fn get_group(&self, id: &str) -> Result<GroupResponse, Error> {
        let url = self.resource_url("groups", Some(id))?;
        self.get(url).await
    }

    /// Create a group. The server answers 201 with the created group.
    ///
    /// `POST /api/groups`
    pub async fn create_group(&self, payload: &CreateGroupPayload) -> Result<GroupResponse, Error> {
        let url = self.resource_url("groups", None)?;
        debug!(name = %payload.name, "creating group");
        self.post(url, payload).await
    }

    /// Rename a group. Only `{name}` comes back; nested collections are
    /// not part of the response.
    ///
    /// `PATCH /api/groups/{id}`
    pub async fn update_group(
        &self,
        id: &str,
        payload: &UpdateGroupPayload,
    ) -> Result<GroupMetadata, Error> {
        let url = self.resource_url("groups", Some(id))?;
        debug!(id, "updating group");
        self.patch(url, payload).await
    }

    /// `DELETE /api/groups/{id}`
    pub async fn delete_group(&self, id: &str) -> Result<(), Error> {
        let url = self.resource_url("groups", Some(id))?;
        debug!(id, "deleting group");
        self.delete(url).await
    }
}
