//! CLI configuration: thin wrapper around `coinly_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--server, --timeout, --profile).

use std::time::Duration;

use coinly_core::CatalogConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use coinly_config::{
    Config, ConfigError, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Build a `CatalogConfig` from the config file, profile, and flags.
///
/// `--server` wins over any profile; `--timeout` wins over the profile
/// timeout, which wins over `defaults.timeout`.
pub fn resolve_catalog_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<CatalogConfig, CliError> {
    if let Some(ref server) = global.server {
        let url: url::Url = server.parse().map_err(|_| CliError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {server}"),
        })?;
        let secs = global.timeout.unwrap_or(config.defaults.timeout);
        return Ok(CatalogConfig::new(url).with_timeout(Duration::from_secs(secs)));
    }

    let profile = config
        .profile(global.profile.as_deref())
        .map_err(|e| match e {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: available_profiles(config),
            },
            other => CliError::Config(other),
        })?;

    let Some((_, profile)) = profile else {
        return Err(CliError::NoConfig {
            path: config_path().display().to_string(),
        });
    };

    let mut resolved = profile.to_catalog_config(config.defaults.timeout)?;
    if let Some(secs) = global.timeout {
        resolved = resolved.with_timeout(Duration::from_secs(secs));
    }
    Ok(resolved)
}
