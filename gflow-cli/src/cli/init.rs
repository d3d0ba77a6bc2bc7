//! # Init Command
//!
//! Initializes a repository for git-flow with default branch names and
//! reports whether anything actually changed.

use anyhow::Result;
use clap::Args;
use gflow_core::command::WorkflowCommand;
use gflow_core::driver::{FlowRequest, run_flow};
use gflow_core::runner::SystemRunner;

use super::branch::RepoArgs;
use super::render_report;

/// Initialize a repository for git-flow
#[derive(Args)]
pub struct InitArgs {
  #[command(flatten)]
  pub repo: RepoArgs,
}

/// Handle the init command
pub(crate) fn handle_init_command(args: InitArgs, json: bool) -> Result<()> {
  let mut request = FlowRequest::new(WorkflowCommand::Init);
  request.executable = args.repo.git.clone();
  request.repo = Some(args.repo.resolve()?);

  let report = run_flow(&request, &SystemRunner)?;
  render_report(&report, json)
}
