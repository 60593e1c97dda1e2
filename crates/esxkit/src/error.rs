//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use esxkit_config::ConfigError;
use esxkit_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const REMOTE_FAULT: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Cannot connect to host endpoint at {url}: {reason}")]
    #[diagnostic(
        code(esxkit::connection_failed),
        help(
            "Check that the host is reachable and its management endpoint is up.\n\
             Self-signed certificate? Retry with --insecure (-k)."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(esxkit::timeout),
        help("Increase the timeout with --timeout or check host responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(esxkit::auth_failed),
        help(
            "Verify the username and password.\n\
             Store a password with: esxkit config set-password"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(esxkit::no_credentials),
        help(
            "Configure credentials with: esxkit config init\n\
             Or set ESXKIT_USERNAME and ESXKIT_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Lookups ──────────────────────────────────────────────────────

    #[error("Unable to locate physical host")]
    #[diagnostic(
        code(esxkit::no_host),
        help("The endpoint answered but reported no hosts. Is it a standalone host?")
    )]
    NoHostFound,

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(esxkit::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    // ── Host ─────────────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(code(esxkit::remote_fault), help("The host rejected the request ({fault})."))]
    RemoteFault { fault: String, message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(esxkit::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(esxkit::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: esxkit config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No host endpoint configured")]
    #[diagnostic(
        code(esxkit::no_config),
        help(
            "Create a profile with: esxkit config init\n\
             Or pass --endpoint with --username and --password.\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(esxkit::config))]
    Config(ConfigError),

    // ── Internal ─────────────────────────────────────────────────────

    #[error("Internal error: {0}")]
    #[diagnostic(code(esxkit::internal))]
    Internal(String),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render report: {0}")]
    #[diagnostic(code(esxkit::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NoHostFound | Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::RemoteFault { .. } => exit_code::REMOTE_FAULT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::NoHostFound => CliError::NoHostFound,

            CoreError::ServiceNotFound { name } => CliError::NotFound {
                resource_type: "service".into(),
                identifier: name,
            },

            CoreError::OptionNotFound { key } => CliError::NotFound {
                resource_type: "advanced option".into(),
                identifier: key,
            },

            CoreError::UnsupportedValueType { type_name } => CliError::Validation {
                field: "value".into(),
                reason: format!("options of type {type_name} cannot be set"),
            },

            CoreError::InvalidTimezone { name } => CliError::Validation {
                field: "timezone".into(),
                reason: format!("'{name}' is not a timezone the host supports"),
            },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::RemoteFault { fault, message } => CliError::RemoteFault { fault, message },

            CoreError::Config { message } => CliError::Validation {
                field: "endpoint".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::ProfileNotFound { name } => CliError::ProfileNotFound {
                name,
                available: String::new(),
            },
            other => CliError::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_kind() {
        let cases = [
            (CoreError::NoHostFound, exit_code::NOT_FOUND),
            (
                CoreError::ServiceNotFound {
                    name: "TSM-SSH".into(),
                },
                exit_code::NOT_FOUND,
            ),
            (
                CoreError::AuthenticationFailed {
                    message: "bad password".into(),
                },
                exit_code::AUTH,
            ),
            (
                CoreError::InvalidTimezone {
                    name: "Mars/Olympus".into(),
                },
                exit_code::USAGE,
            ),
            (
                CoreError::RemoteFault {
                    fault: "HostConfigFault".into(),
                    message: "busy".into(),
                },
                exit_code::REMOTE_FAULT,
            ),
            (CoreError::Timeout { timeout_secs: 30 }, exit_code::TIMEOUT),
            (CoreError::Internal("boom".into()), exit_code::GENERAL),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn remote_fault_shows_host_message() {
        let err = CliError::from(CoreError::RemoteFault {
            fault: "HostConfigFault".into(),
            message: "service cannot be started".into(),
        });
        assert_eq!(err.to_string(), "service cannot be started");
    }
}
