// ── Core error types ──
//
// Cache-facing errors from coinly-core. Consumers never see HTTP status
// codes or JSON decode failures directly; `From<coinly_api::Error>`
// classifies transport-layer errors into this taxonomy.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("{message}")]
    Unknown { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<coinly_api::Error> for CoreError {
    fn from(err: coinly_api::Error) -> Self {
        // Any request that never produced a usable response.
        let network = err.is_network();
        match err {
            coinly_api::Error::NotFound { path, .. } => {
                let (entity_type, identifier) = split_resource_path(&path);
                CoreError::NotFound {
                    entity_type,
                    identifier,
                }
            }
            coinly_api::Error::Rejected { message, .. } => CoreError::Validation { message },
            coinly_api::Error::Timeout { url } => CoreError::Network {
                message: format!("request to {url} timed out"),
            },
            coinly_api::Error::Transport(e) if network => CoreError::Network {
                message: e.to_string(),
            },
            coinly_api::Error::Transport(e) => CoreError::Unknown {
                message: e.to_string(),
            },
            coinly_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            coinly_api::Error::InvalidBaseUrl { url } => CoreError::Config {
                message: format!("Base URL cannot carry API paths: {url}"),
            },
            coinly_api::Error::Api { status, message } => CoreError::Unknown {
                message: format!("Server error (HTTP {status}): {message}"),
            },
            coinly_api::Error::Deserialization { message, .. } => CoreError::Unknown {
                message: format!("Unexpected response: {message}"),
            },
        }
    }
}

/// `/api/coins/k1` → (`"coin"`, `"k1"`).
fn split_resource_path(path: &str) -> (String, String) {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let identifier = segments.next().unwrap_or_default().to_owned();
    let entity_type = match segments.next() {
        Some("groups") => "group",
        Some("collections") => "collection",
        Some("coins") => "coin",
        _ => "resource",
    };
    (entity_type.to_owned(), identifier)
}
