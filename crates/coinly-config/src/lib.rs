//! Shared configuration for the coinly CLI.
//!
//! TOML profiles layered with `COINLY_` environment variables, and
//! translation to `coinly_core::CatalogConfig`. The CLI adds
//! flag-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use coinly_core::CatalogConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("unknown profile '{name}'")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named on the command line.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named catalog server profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up `name`, or the default profile when `name` is `None`.
    ///
    /// Returns `Ok(None)` when no name was given and the default
    /// profile is not defined; an explicitly named profile must exist.
    pub fn profile<'a>(&'a self, name: Option<&'a str>) -> Result<Option<(&'a str, &'a Profile)>, ConfigError> {
        match name {
            Some(name) => self
                .profiles
                .get(name)
                .map(|p| Some((name, p)))
                .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() }),
            None => Ok(self
                .default_profile
                .as_deref()
                .and_then(|n| self.profiles.get(n).map(|p| (n, p)))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    10
}

/// A named catalog server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Server base URL (e.g., "http://localhost:8080").
    pub server: String,

    /// Override the default timeout.
    pub timeout: Option<u64>,
}

impl Profile {
    /// Build a `CatalogConfig`, falling back to `default_timeout` seconds.
    pub fn to_catalog_config(&self, default_timeout: u64) -> Result<CatalogConfig, ConfigError> {
        let url: url::Url = self.server.parse().map_err(|_| ConfigError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {}", self.server),
        })?;
        let timeout = Duration::from_secs(self.timeout.unwrap_or(default_timeout));
        Ok(CatalogConfig::new(url).with_timeout(timeout))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "coinly", "coinly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("coinly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
///
/// Environment keys use `__` for nesting, e.g.
/// `COINLY_DEFAULTS__TIMEOUT=5` or `COINLY_DEFAULT_PROFILE=work`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("COINLY_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
