//! # Branch Commands
//!
//! Derive-based implementations of the feature, release, and hotfix
//! commands. All three share the same action/name surface; feature adds a
//! --remote for the pull action and hotfix adds a --base for the start
//! action.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gflow_core::command::{BranchAction, WorkflowCommand};
use gflow_core::driver::{DEFAULT_EXECUTABLE, FlowRequest, run_flow};
use gflow_core::runner::SystemRunner;

use super::render_report;

/// Options shared by every command that runs inside a repository
#[derive(Args)]
pub struct RepoArgs {
  /// Path to the repository (defaults to the current directory)
  #[arg(long, short = 'r', value_name = "PATH")]
  pub repo: Option<PathBuf>,

  /// git executable to invoke
  #[arg(long, value_name = "EXECUTABLE", default_value = DEFAULT_EXECUTABLE)]
  pub git: String,
}

impl RepoArgs {
  /// Repository the operation runs in, falling back to the current
  /// directory.
  pub(crate) fn resolve(&self) -> Result<PathBuf> {
    match &self.repo {
      Some(path) => Ok(path.clone()),
      None => env::current_dir().context("Failed to determine the current directory"),
    }
  }
}

/// Feature branch operations
#[derive(Args)]
pub struct FeatureArgs {
  /// Action to perform
  #[arg(value_enum, index = 1)]
  pub action: BranchAction,

  /// Branch the action applies to (required for everything except list)
  #[arg(index = 2)]
  pub name: Option<String>,

  /// Remote to pull the branch from (pull action only)
  #[arg(long, value_name = "REMOTE")]
  pub remote: Option<String>,

  #[command(flatten)]
  pub repo: RepoArgs,
}

/// Release branch operations
#[derive(Args)]
pub struct ReleaseArgs {
  /// Action to perform
  #[arg(value_enum, index = 1)]
  pub action: BranchAction,

  /// Branch the action applies to, usually a version number
  #[arg(index = 2)]
  pub name: Option<String>,

  #[command(flatten)]
  pub repo: RepoArgs,
}

/// Hotfix branch operations
#[derive(Args)]
pub struct HotfixArgs {
  /// Action to perform
  #[arg(value_enum, index = 1)]
  pub action: BranchAction,

  /// Branch the action applies to, usually a version number
  #[arg(index = 2)]
  pub name: Option<String>,

  /// Branch to use as the base for a new hotfix branch (start action only)
  #[arg(long, value_name = "BRANCH")]
  pub base: Option<String>,

  #[command(flatten)]
  pub repo: RepoArgs,
}

/// Handle the feature command
pub(crate) fn handle_feature_command(args: FeatureArgs, json: bool) -> Result<()> {
  let mut request = FlowRequest::new(WorkflowCommand::Feature);
  request.executable = args.repo.git.clone();
  request.action = Some(args.action);
  request.name = args.name;
  request.remote = args.remote;
  request.repo = Some(args.repo.resolve()?);

  let report = run_flow(&request, &SystemRunner)?;
  render_report(&report, json)
}

/// Handle the release command
pub(crate) fn handle_release_command(args: ReleaseArgs, json: bool) -> Result<()> {
  let mut request = FlowRequest::new(WorkflowCommand::Release);
  request.executable = args.repo.git.clone();
  request.action = Some(args.action);
  request.name = args.name;
  request.repo = Some(args.repo.resolve()?);

  let report = run_flow(&request, &SystemRunner)?;
  render_report(&report, json)
}

/// Handle the hotfix command
pub(crate) fn handle_hotfix_command(args: HotfixArgs, json: bool) -> Result<()> {
  let mut request = FlowRequest::new(WorkflowCommand::Hotfix);
  request.executable = args.repo.git.clone();
  request.action = Some(args.action);
  request.name = args.name;
  request.base = args.base;
  request.repo = Some(args.repo.resolve()?);

  let report = run_flow(&request, &SystemRunner)?;
  render_report(&report, json)
}
