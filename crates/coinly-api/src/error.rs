use thiserror::Error;

/// Top-level error type for the `coinly-api` crate.
///
/// Covers every failure mode of a single request/response round-trip.
/// `coinly-core` classifies these into its cache-facing taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL cannot be used for API paths: {url}")]
    InvalidBaseUrl { url: String },

    /// Request timed out.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    // ── Server responses ────────────────────────────────────────────
    /// The addressed resource does not exist (HTTP 404).
    #[error("Not found: {path} ({message})")]
    NotFound { path: String, message: String },

    /// The server rejected the payload (HTTP 400, 409, 422).
    #[error("Request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Any other non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if the request never produced a usable response.
    pub fn is_network(&self) -> bool {
        match self {
            Self::Transport(e) => {
                e.is_timeout() || e.is_connect() || e.is_request() || e.is_body()
            }
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Rejected { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
