// ── Core error types ──
//
// User-facing errors from esxkit-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<esxkit_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to host endpoint at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Host endpoint timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Unable to locate physical host")]
    NoHostFound,

    #[error("Service not found: {name}")]
    ServiceNotFound { name: String },

    #[error("Advanced option not found: {key}")]
    OptionNotFound { key: String },

    // ── Validation errors ────────────────────────────────────────────
    #[error("Unsupported option value type: {type_name}")]
    UnsupportedValueType { type_name: String },

    #[error("Invalid timezone: {name}")]
    InvalidTimezone { name: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── Host faults ──────────────────────────────────────────────────
    #[error("{message}")]
    RemoteFault { fault: String, message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<esxkit_api::Error> for CoreError {
    fn from(err: esxkit_api::Error) -> Self {
        match err {
            esxkit_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            esxkit_api::Error::NotLoggedIn => CoreError::AuthenticationFailed {
                message: "No active session -- login required".into(),
            },
            esxkit_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                }
            }
            esxkit_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            esxkit_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            esxkit_api::Error::Fault { fault, message, .. } => {
                CoreError::RemoteFault { fault, message }
            }
            esxkit_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_keeps_host_message() {
        let err: CoreError = esxkit_api::Error::Fault {
            fault: "RuntimeFault".into(),
            message: "A general system error occurred".into(),
            status: 500,
        }
        .into();
        assert_eq!(err.to_string(), "A general system error occurred");
        assert!(matches!(err, CoreError::RemoteFault { ref fault, .. } if fault == "RuntimeFault"));
    }

    #[test]
    fn not_logged_in_is_auth_failure() {
        let err: CoreError = esxkit_api::Error::NotLoggedIn.into();
        assert!(matches!(err, CoreError::AuthenticationFailed { .. }));
    }
}
