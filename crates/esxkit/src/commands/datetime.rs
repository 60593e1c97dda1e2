//! Datetime command handler.

use esxkit_core::{CoreError, DateTimeSpec, HostHandle, Report, SessionConfig};

use crate::cli::DatetimeArgs;

pub async fn handle(args: DatetimeArgs, session: &SessionConfig) -> Result<Report, CoreError> {
    let spec = DateTimeSpec {
        ntp_servers: args
            .ntp_servers
            .into_iter()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect(),
        ntpd_state: super::run_state(args.ntpd_state),
        timezone: args.timezone,
    };

    // An empty list would clear every server on the host.
    if spec.ntp_servers.is_empty() {
        return Err(CoreError::ValidationFailed {
            message: "at least one non-empty --ntp-server is required".into(),
        });
    }

    let changed = HostHandle::oneshot(session, |host| async move {
        esxkit_core::reconcile_datetime(&host, &spec).await
    })
    .await?;

    Ok(Report::changed(changed))
}
