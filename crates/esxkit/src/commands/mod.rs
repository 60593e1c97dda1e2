//! Command dispatch: routes parsed CLI commands to their handlers.
//!
//! Every handler runs inside one host session and yields a `Report`.
//! The report, success or failure, is printed here so each invocation
//! emits exactly one.

pub mod advanced_setting;
pub mod config_cmd;
pub mod datetime;
pub mod facts;
pub mod service;

use esxkit_core::{CoreError, Report, RunState, SessionConfig};

use crate::cli::{Command, GlobalOpts, ServiceState};
use crate::error::CliError;
use crate::output;

/// Dispatch a host command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    session: &SessionConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let outcome = match cmd {
        Command::Service(args) => service::handle(args, session).await,
        Command::Datetime(args) => datetime::handle(args, session).await,
        Command::AdvancedSetting(args) => advanced_setting::handle(args, session).await,
        Command::Facts(args) => facts::handle(args, session).await,

        // Handled in main before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    };

    finish(outcome, global)
}

/// Print the report for `outcome` and convert failures for exit handling.
fn finish(outcome: Result<Report, CoreError>, global: &GlobalOpts) -> Result<(), CliError> {
    match outcome {
        Ok(report) => output::print_report(&report, global.output, global.quiet),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            output::print_report(&Report::failed(err.to_string()), global.output, false)?;
            Err(err.into())
        }
    }
}

/// Map the CLI run-state flag onto the core enum.
pub(crate) fn run_state(state: ServiceState) -> RunState {
    match state {
        ServiceState::Running => RunState::Running,
        ServiceState::Stopped => RunState::Stopped,
        ServiceState::Restarted => RunState::Restarted,
    }
}
