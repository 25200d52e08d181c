// ── Runtime catalog configuration ──
//
// Describes where the catalog server lives and how long to wait for it.
// The core never reads config files; callers build a `CatalogConfig`
// and hand it in.

use std::time::Duration;

use url::Url;

const DEFAULT_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for one catalog server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Server root (e.g. `http://localhost:8080`). API paths go below `/api`.
    pub url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_URL).expect("default catalog URL is valid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.url.as_str(), "http://localhost:8080/");
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }
}
