// ── State reconcilers ──
//
// Each reconciler reads the observed state, compares it to the desired
// state, and issues mutation calls only for what differs. Calls are
// awaited one after another; a failure leaves earlier mutations applied.

mod datetime;
mod option;
mod service;

pub use datetime::{DateTimeSpec, NTPD_SERVICE, reconcile_datetime};
pub use option::{OptionSpec, reconcile_option};
pub use service::{ServiceSpec, reconcile_service};

use esxkit_api::models::HostService;
use strum::{Display, EnumString};
use tracing::{debug, info};

use crate::error::CoreError;
use crate::session::HostHandle;

/// Desired run state of a host service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RunState {
    #[default]
    Running,
    Stopped,
    /// Restart unconditionally; always reports a change.
    Restarted,
}

// ── Shared steps ─────────────────────────────────────────────────────

/// Find a service by key.
pub(crate) async fn find_service(host: &HostHandle, name: &str) -> Result<HostService, CoreError> {
    host.client()
        .list_services(host.id())
        .await?
        .into_iter()
        .find(|s| s.key == name)
        .ok_or_else(|| CoreError::ServiceNotFound { name: name.into() })
}

/// Drive a service toward `desired`. Returns whether a call was issued.
pub(crate) async fn apply_run_state(
    host: &HostHandle,
    service: &HostService,
    desired: RunState,
) -> Result<bool, CoreError> {
    let client = host.client();
    let key = service.key.as_str();

    match (desired, service.running) {
        (RunState::Restarted, _) => {
            info!(service = key, "restarting service");
            client.restart_service(host.id(), key).await?;
            Ok(true)
        }
        (RunState::Running, false) => {
            info!(service = key, "starting service");
            client.start_service(host.id(), key).await?;
            Ok(true)
        }
        (RunState::Stopped, true) => {
            info!(service = key, "stopping service");
            client.stop_service(host.id(), key).await?;
            Ok(true)
        }
        _ => {
            debug!(service = key, running = service.running, %desired, "run state already satisfied");
            Ok(false)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn run_state_parses_lowercase() {
        assert_eq!("running".parse::<RunState>().unwrap(), RunState::Running);
        assert_eq!("restarted".parse::<RunState>().unwrap(), RunState::Restarted);
        assert!("paused".parse::<RunState>().is_err());
        assert_eq!(RunState::Stopped.to_string(), "stopped");
    }
}
