//! Advanced-setting command handler.

use esxkit_core::{CoreError, HostHandle, OptionSpec, Report, SessionConfig};

use crate::cli::AdvancedSettingArgs;

pub async fn handle(args: AdvancedSettingArgs, session: &SessionConfig) -> Result<Report, CoreError> {
    let spec = OptionSpec {
        key: args.option,
        value: args.value,
    };

    let changed = HostHandle::oneshot(session, |host| async move {
        esxkit_core::reconcile_option(&host, &spec).await
    })
    .await?;

    Ok(Report::changed(changed))
}
