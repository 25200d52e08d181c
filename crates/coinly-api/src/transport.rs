// Shared transport configuration for building reqwest::Client instances.

use std::time::Duration;

use crate::error::Error;

const DEFAULT_USER_AGENT: &str = concat!("coinly/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_ten_seconds() {
        assert_eq!(TransportConfig::default().timeout, Duration::from_secs(10));
    }

    #[test]
    fn with_timeout_overrides() {
        let cfg = TransportConfig::default().with_timeout(Duration::from_secs(3));
        assert_eq!(cfg.timeout, Duration::from_secs(3));
        assert!(cfg.user_agent.starts_with("coinly/"));
    }
}
