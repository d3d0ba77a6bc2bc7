//! # Flow Driver
//!
//! Validates a flow request and drives the external tool through the
//! idempotency gate: at most one read-only list call followed by at most one
//! mutating call, each a single attempt with no retries. A request that
//! resolves to an already-satisfied target state reports `changed = false`
//! without spawning the mutating command at all.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::command::{BranchAction, CommandLine, WorkflowCommand};
use crate::error::FlowError;
use crate::gate::should_skip;
use crate::inventory::list_branches;
use crate::report::FlowReport;
use crate::runner::CommandRunner;

/// Default name of the external executable.
pub const DEFAULT_EXECUTABLE: &str = "git";

/// Substring git-flow prints on stderr when `init` finds an already
/// configured repository.
const ALREADY_INITIALIZED: &str = "Already initialized";

/// A validated, immutable request for one workflow operation.
///
/// `action` and `name` are required for every command except `init` and
/// `version`; `repo` is required for every command except `version`; `base`
/// is meaningful only for hotfix/start and `remote` only for feature/pull.
/// The combination rules are enforced by [`run_flow`] before any process is
/// spawned.
#[derive(Debug, Clone)]
pub struct FlowRequest {
  /// Executable to invoke, `git` unless overridden.
  pub executable: String,
  /// Top-level workflow command.
  pub command: WorkflowCommand,
  /// Action within a branch-type command.
  pub action: Option<BranchAction>,
  /// Branch the action applies to.
  pub name: Option<String>,
  /// Base branch for a new hotfix branch.
  pub base: Option<String>,
  /// Remote to pull a feature branch from.
  pub remote: Option<String>,
  /// Repository the operation runs in.
  pub repo: Option<PathBuf>,
}

impl FlowRequest {
  /// New request for `command` with the default executable and every other
  /// field unset.
  pub fn new(command: WorkflowCommand) -> Self {
    Self {
      executable: DEFAULT_EXECUTABLE.to_string(),
      command,
      action: None,
      name: None,
      base: None,
      remote: None,
      repo: None,
    }
  }
}

/// Execute one flow request against `runner`.
///
/// Exactly one [`FlowReport`] is produced per request; any failure aborts
/// the request immediately.
pub fn run_flow(request: &FlowRequest, runner: &dyn CommandRunner) -> Result<FlowReport, FlowError> {
  match request.command {
    WorkflowCommand::Version => run_version(request, runner),
    WorkflowCommand::Init => {
      let repo = require_repo(request)?;
      run_init(request, repo, runner)
    }
    WorkflowCommand::Feature | WorkflowCommand::Release | WorkflowCommand::Hotfix => {
      let repo = require_repo(request)?;
      let action = request.action.ok_or_else(|| {
        FlowError::Validation(format!("the `{}` command requires an action", request.command))
      })?;
      run_branch_op(request, repo, action, runner)
    }
  }
}

fn require_repo(request: &FlowRequest) -> Result<&Path, FlowError> {
  request.repo.as_deref().ok_or_else(|| {
    FlowError::Validation(format!(
      "the `{}` command requires a repository path",
      request.command
    ))
  })
}

/// `<git> flow version` — read-only, never reports a change.
fn run_version(request: &FlowRequest, runner: &dyn CommandRunner) -> Result<FlowReport, FlowError> {
  let command = CommandLine::version(&request.executable);
  let output = runner.run(&command, None)?;

  if !output.success() {
    return Err(FlowError::ExternalTool {
      command: command.to_string(),
      stderr: output.stderr,
    });
  }

  Ok(FlowReport::version(command.to_string(), output.stdout.trim().to_string()))
}

/// `<git> flow init -d` — reports `changed = false` when the repository was
/// already initialized, which git-flow announces on stderr.
fn run_init(request: &FlowRequest, repo: &Path, runner: &dyn CommandRunner) -> Result<FlowReport, FlowError> {
  let command = CommandLine::init(&request.executable);
  let output = runner.run(&command, Some(repo))?;

  if !output.success() {
    return Err(FlowError::ExternalTool {
      command: command.to_string(),
      stderr: output.stderr,
    });
  }

  let changed = !output.stderr.contains(ALREADY_INITIALIZED);
  Ok(FlowReport {
    changed,
    command: command.to_string(),
    msg: Some(output.stderr),
    version: None,
    branches: None,
  })
}

/// Branch-type commands: read the inventory, consult the gate, and only then
/// run the mutating command.
fn run_branch_op(
  request: &FlowRequest,
  repo: &Path,
  action: BranchAction,
  runner: &dyn CommandRunner,
) -> Result<FlowReport, FlowError> {
  if action == BranchAction::List {
    let inventory = list_branches(runner, &request.executable, request.command, repo)?;
    let list_command = CommandLine::list(&request.executable, request.command);
    return Ok(FlowReport::branches(list_command.to_string(), inventory));
  }

  let name = request
    .name
    .as_deref()
    .ok_or_else(|| FlowError::Validation(format!("the `{action}` action requires a branch name")))?;

  let command = CommandLine::for_branch_op(
    &request.executable,
    request.command,
    action,
    name,
    request.base.as_deref(),
    request.remote.as_deref(),
  );

  let inventory = list_branches(runner, &request.executable, request.command, repo)?;

  if should_skip(action, name, &inventory) {
    debug!(command = %command, "repository already in desired state");
    return Ok(FlowReport::unchanged(command.to_string()));
  }

  let output = runner.run(&command, Some(repo))?;

  if !output.success() {
    return Err(FlowError::ExternalTool {
      command: command.to_string(),
      stderr: output.stderr,
    });
  }

  Ok(FlowReport::changed(command.to_string(), output.stderr))
}
