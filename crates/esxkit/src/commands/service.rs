//! Service command handler.

use esxkit_core::{CoreError, HostHandle, Report, ServicePolicy, ServiceSpec, SessionConfig};

use crate::cli::{ServiceArgs, StartupPolicy};

pub async fn handle(args: ServiceArgs, session: &SessionConfig) -> Result<Report, CoreError> {
    let spec = ServiceSpec {
        name: args.name,
        state: super::run_state(args.state),
        policy: match args.policy {
            StartupPolicy::On => ServicePolicy::On,
            StartupPolicy::Off => ServicePolicy::Off,
            StartupPolicy::Automatic => ServicePolicy::Automatic,
        },
    };

    let changed = HostHandle::oneshot(session, |host| async move {
        esxkit_core::reconcile_service(&host, &spec).await
    })
    .await?;

    Ok(Report::changed(changed))
}
