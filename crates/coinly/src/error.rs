//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use coinly_config::ConfigError;
use coinly_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the catalog server: {message}")]
    #[diagnostic(
        code(coinly::unreachable),
        help(
            "Check that the catalog server is running and accessible.\n\
             Point at it with --server or: coinly config set server <url>"
        )
    )]
    Unreachable { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(coinly::not_found),
        help("Run: coinly {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    /// A catalog entry point reported failure through its error slot.
    #[error("{message}")]
    #[diagnostic(code(coinly::operation_failed))]
    Operation { message: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("Server error: {message}")]
    #[diagnostic(code(coinly::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(coinly::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(coinly::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: coinly config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No catalog server configured")]
    #[diagnostic(
        code(coinly::no_config),
        help(
            "Create a profile with: coinly config init\n\
             Or pass --server / set COINLY_SERVER.\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(coinly::config))]
    Config(#[from] ConfigError),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unreachable { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    pub(crate) fn not_found(resource_type: &str, identifier: &str) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
            list_command: format!("{resource_type}s list"),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::not_found(&entity_type, &identifier),

            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Network { message } => CliError::Unreachable { message },

            CoreError::Unknown { message } => CliError::ApiError { message },

            CoreError::Config { message } => CliError::Validation {
                field: "server".into(),
                reason: message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_not_found_points_at_list_command() {
        let err = CliError::from(CoreError::NotFound {
            entity_type: "collection".into(),
            identifier: "c9".into(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert!(matches!(
            err,
            CliError::NotFound { ref list_command, .. } if list_command == "collections list"
        ));
    }

    #[test]
    fn network_failures_use_connection_exit_code() {
        let err = CliError::from(CoreError::Network {
            message: "connection refused".into(),
        });
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn operation_failures_are_general() {
        let err = CliError::Operation {
            message: "Failed to create group: Validation failed: Group already exists".into(),
        };
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert_eq!(
            err.to_string(),
            "Failed to create group: Validation failed: Group already exists"
        );
    }
}
