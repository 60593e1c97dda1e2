//! Facts command handler.

use esxkit_core::{CoreError, FactSelection, HostHandle, Report, SessionConfig};

use crate::cli::FactsArgs;

pub async fn handle(args: FactsArgs, session: &SessionConfig) -> Result<Report, CoreError> {
    let selection = FactSelection::from_names(
        args.types
            .iter()
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty()),
    );

    // Reject unknown categories before opening a session.
    selection.resolve()?;

    let facts = HostHandle::oneshot(session, |host| async move {
        esxkit_core::gather(&host, &selection).await
    })
    .await?;

    Ok(Report::facts(facts))
}
