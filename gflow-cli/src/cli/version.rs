//! # Version Command
//!
//! Reports the version of the installed git-flow extension. The only
//! command that runs outside a repository.

use anyhow::Result;
use clap::Args;
use gflow_core::command::WorkflowCommand;
use gflow_core::driver::{DEFAULT_EXECUTABLE, FlowRequest, run_flow};
use gflow_core::runner::SystemRunner;

use super::render_report;

/// Report the installed git-flow version
#[derive(Args)]
pub struct VersionArgs {
  /// git executable to invoke
  #[arg(long, value_name = "EXECUTABLE", default_value = DEFAULT_EXECUTABLE)]
  pub git: String,
}

/// Handle the version command
pub(crate) fn handle_version_command(args: VersionArgs, json: bool) -> Result<()> {
  let mut request = FlowRequest::new(WorkflowCommand::Version);
  request.executable = args.git;

  let report = run_flow(&request, &SystemRunner)?;
  render_report(&report, json)
}
