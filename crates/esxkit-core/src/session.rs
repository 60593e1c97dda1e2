// ── Host session ──
//
// Login, first-host lookup, and logout for a single invocation. A
// `HostHandle` is the client plus the identifier of the host every
// reconciler and fact collector operates on.

use std::future::Future;
use std::sync::Arc;

use esxkit_api::transport::{TlsMode, TransportConfig};
use esxkit_api::HostClient;
use tracing::{debug, info, warn};

use crate::config::{SessionConfig, TlsVerification};
use crate::error::CoreError;

/// An authenticated client bound to one host.
///
/// Cheaply cloneable; clones share the underlying session.
#[derive(Clone)]
pub struct HostHandle {
    client: Arc<HostClient>,
    id: String,
    name: String,
}

impl std::fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandle")
            .field("endpoint", &self.client.base_url().as_str())
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl HostHandle {
    /// Wrap an already-authenticated client.
    pub fn new(client: Arc<HostClient>, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client,
            id: id.into(),
            name: name.into(),
        }
    }

    /// Log in and bind to the first host the endpoint reports.
    ///
    /// Fails with [`CoreError::NoHostFound`] when the host list is empty;
    /// the session is logged out before returning that error.
    pub async fn connect(config: &SessionConfig) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let client = HostClient::new(config.url.clone(), &transport)?;

        client
            .login(&config.credentials.username, &config.credentials.password)
            .await
            .map_err(|e| with_timeout(e.into(), config))?;
        debug!("session authentication successful");

        let hosts = client
            .list_hosts()
            .await
            .map_err(|e| with_timeout(e.into(), config))?;

        let Some(first) = hosts.into_iter().next() else {
            if let Err(e) = client.logout().await {
                warn!(error = %e, "logout failed (non-fatal)");
            }
            return Err(CoreError::NoHostFound);
        };

        info!(host = %first.host, name = %first.name, "connected to host");
        Ok(Self::new(Arc::new(client), first.host, first.name))
    }

    /// End the session. Logout failures are logged, never returned.
    pub async fn disconnect(&self) {
        if let Err(e) = self.client.logout().await {
            warn!(error = %e, "logout failed (non-fatal)");
        }
        debug!("disconnected");
    }

    /// One-shot: connect, run closure, disconnect.
    ///
    /// The session is torn down whether or not the closure succeeds.
    pub async fn oneshot<F, Fut, T>(config: &SessionConfig, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(HostHandle) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let host = Self::connect(config).await?;
        let result = f(host.clone()).await;
        host.disconnect().await;
        result.map_err(|e| with_timeout(e, config))
    }

    pub fn client(&self) -> &HostClient {
        &self.client
    }

    /// Managed-object identifier used in host-scoped URLs.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the host.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn build_transport(config: &SessionConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}

/// Transport timeouts carry no duration; fill in the configured one.
fn with_timeout(err: CoreError, config: &SessionConfig) -> CoreError {
    match err {
        CoreError::Timeout { .. } => CoreError::Timeout {
            timeout_secs: config.timeout.as_secs(),
        },
        other => other,
    }
}
