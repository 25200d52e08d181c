// Catalog API HTTP client
//
// Wraps `reqwest::Client` with URL construction under `/api`, status
// classification, and JSON decoding. Resource endpoints (groups,
// collections, coins) are implemented as inherent methods in separate
// files to keep this module focused on transport mechanics.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Error body shape used by the catalog server: `{"error": "..."}`.
/// Some deployments answer with `{"message": "..."}` instead.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Raw HTTP client for the catalog REST API.
///
/// Every method performs exactly one request and returns the decoded
/// payload, or an [`Error`] describing why the round-trip failed.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the server root (e.g. `http://localhost:8080`); all
    /// resource paths are appended below `/api`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/api/{resource}[/{id}]`, percent-encoding the id.
    pub(crate) fn resource_url(&self, resource: &str, id: Option<&str>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?;
            segments.pop_if_empty().push("api").push(resource);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.send(self.http.get(url.clone()), &url).await?;
        Self::decode(resp).await
    }

    /// Send a POST request with JSON body and decode the JSON response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self.send(self.http.post(url.clone()).json(body), &url).await?;
        Self::decode(resp).await
    }

    /// Send a body-less POST request, discarding any response body.
    pub(crate) async fn post_empty(&self, url: Url) -> Result<(), Error> {
        debug!("POST {}", url);
        self.send(self.http.post(url.clone()), &url).await?;
        Ok(())
    }

    /// Send a PATCH request with JSON body and decode the JSON response.
    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("PATCH {}", url);
        let resp = self.send(self.http.patch(url.clone()).json(body), &url).await?;
        Self::decode(resp).await
    }

    /// Send a DELETE request. The server answers 204 with no body.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);
        self.send(self.http.delete(url.clone()), &url).await?;
        Ok(())
    }

    // ── Response handling ────────────────────────────────────────────

    /// Send the request and classify non-success statuses.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<reqwest::Response, Error> {
        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    url: url.to_string(),
                }
            } else {
                Error::Transport(e)
            }
        })?;

        let status = resp.status();
        trace!(%status, "response received");
        if status.is_success() {
            return Ok(resp);
        }

        let path = resp.url().path().to_owned();
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| format!("HTTP {status}"), str::to_owned)
        });

        Err(match status {
            StatusCode::NOT_FOUND => Error::NotFound { path, message },
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Error::Rejected {
                    status: status.as_u16(),
                    message,
                }
            }
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}

/// Pull a human-readable message out of an error body, if it has one.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}
