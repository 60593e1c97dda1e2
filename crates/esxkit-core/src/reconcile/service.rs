use esxkit_api::models::ServicePolicy;
use tracing::info;

use super::{RunState, apply_run_state, find_service};
use crate::error::CoreError;
use crate::session::HostHandle;

/// Desired state of one host service.
#[derive(Debug, Clone)]
pub struct ServiceSpec {
    /// Service key, e.g. `TSM-SSH`.
    pub name: String,
    pub state: RunState,
    pub policy: ServicePolicy,
}

impl ServiceSpec {
    /// Running with policy `on`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RunState::Running,
            policy: ServicePolicy::On,
        }
    }
}

/// Bring a service's run state and startup policy to `spec`.
///
/// Run state and policy are reconciled independently; either one alone
/// can report a change.
pub async fn reconcile_service(host: &HostHandle, spec: &ServiceSpec) -> Result<bool, CoreError> {
    let service = find_service(host, &spec.name).await?;

    let mut changed = apply_run_state(host, &service, spec.state).await?;

    if service.policy != spec.policy {
        info!(
            service = %spec.name,
            from = service.policy.as_str(),
            to = spec.policy.as_str(),
            "updating service policy"
        );
        host.client()
            .update_service_policy(host.id(), &service.key, spec.policy)
            .await?;
        changed = true;
    }

    Ok(changed)
}
