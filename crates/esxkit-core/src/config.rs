// ── Runtime connection configuration ──
//
// These types describe *how* to reach a host management endpoint.
// They carry credential data and connection tuning, but never touch disk.
// The CLI constructs a `SessionConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Username/password pair for the session login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed host certificates).
    DangerAcceptInvalid,
}

/// Configuration for one session against one endpoint.
///
/// Built by the CLI, passed to [`HostHandle::connect`](crate::HostHandle::connect).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Endpoint URL (e.g., `https://esxi01.lab`).
    pub url: Url,
    pub credentials: Credentials,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SessionConfig {
    pub fn new(url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            credentials: Credentials {
                username: username.into(),
                password,
            },
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}
