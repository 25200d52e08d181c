// Server lifecycle endpoints

use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;

impl CatalogClient {
    /// Ask the server to shut down.
    ///
    /// `POST /api/shutdown`
    pub async fn shutdown(&self) -> Result<(), Error> {
        let url = self.resource_url("shutdown", None)?;
        debug!("requesting server shutdown");
        self.post_empty(url).await
    }
}
