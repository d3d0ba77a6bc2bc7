//! # Command Construction
//!
//! Maps a workflow command/action pair onto the exact git-flow invocation to
//! execute. Every command-line shape is its own [`CommandLine`] variant, so
//! the two irregular formats (hotfix/start's trailing base argument and
//! pull's remote-before-name ordering) are explicit and individually
//! testable instead of being buried in template substitutions.

use std::fmt;

use clap::ValueEnum;

/// Top-level git-flow command category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowCommand {
  /// Initialize a repository for git-flow
  Init,
  /// Feature branch lifecycle
  Feature,
  /// Release branch lifecycle
  Release,
  /// Hotfix branch lifecycle
  Hotfix,
  /// Report the installed git-flow version
  Version,
}

impl WorkflowCommand {
  /// The token this command uses on the git-flow command line.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Init => "init",
      Self::Feature => "feature",
      Self::Release => "release",
      Self::Hotfix => "hotfix",
      Self::Version => "version",
    }
  }
}

impl fmt::Display for WorkflowCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Action performed within a branch-type command (feature, release, hotfix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BranchAction {
  /// Create the branch
  Start,
  /// Merge the branch back and remove it
  Finish,
  /// List branches of this type
  List,
  /// Publish the branch to the remote
  Publish,
  /// Track a remotely published branch
  Track,
  /// Rebase the branch on its base
  Rebase,
  /// Check the branch out
  Checkout,
  /// Pull the branch from a remote
  Pull,
}

impl BranchAction {
  /// The token this action uses on the git-flow command line.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Start => "start",
      Self::Finish => "finish",
      Self::List => "list",
      Self::Publish => "publish",
      Self::Track => "track",
      Self::Rebase => "rebase",
      Self::Checkout => "checkout",
      Self::Pull => "pull",
    }
  }
}

impl fmt::Display for BranchAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A fully-resolved git-flow invocation.
///
/// Each variant owns its argument ordering. [`CommandLine::argv`] yields the
/// argument vector handed to the process runner and the [`fmt::Display`]
/// rendering is the exact command text reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
  /// `<git> flow version`
  Version { executable: String },
  /// `<git> flow init -d`
  Init { executable: String },
  /// `<git> flow <command> list`
  List {
    executable: String,
    command: WorkflowCommand,
  },
  /// `<git> flow <command> <action> <name>` — the default shape for every
  /// mutating branch action.
  Branch {
    executable: String,
    command: WorkflowCommand,
    action: BranchAction,
    name: String,
  },
  /// `<git> flow hotfix start <name> <base>` — the base branch trails the
  /// new branch name.
  HotfixStart {
    executable: String,
    name: String,
    base: String,
  },
  /// `<git> flow <command> pull <remote> <name>` — the remote precedes the
  /// branch name, unlike every other action.
  Pull {
    executable: String,
    command: WorkflowCommand,
    remote: String,
    name: String,
  },
}

impl CommandLine {
  /// Fixed invocation reporting the installed git-flow version.
  pub fn version(executable: &str) -> Self {
    Self::Version {
      executable: executable.to_string(),
    }
  }

  /// Fixed invocation initializing a repository with default branch names.
  pub fn init(executable: &str) -> Self {
    Self::Init {
      executable: executable.to_string(),
    }
  }

  /// Read-only invocation listing the branches of one command type.
  pub fn list(executable: &str, command: WorkflowCommand) -> Self {
    Self::List {
      executable: executable.to_string(),
      command,
    }
  }

  /// Select the invocation shape for a mutating branch operation.
  ///
  /// `base` only participates for hotfix/start and `remote` only for pull;
  /// both are ignored everywhere else.
  pub fn for_branch_op(
    executable: &str,
    command: WorkflowCommand,
    action: BranchAction,
    name: &str,
    base: Option<&str>,
    remote: Option<&str>,
  ) -> Self {
    match (command, action, base) {
      (WorkflowCommand::Hotfix, BranchAction::Start, Some(base)) if !base.is_empty() => Self::HotfixStart {
        executable: executable.to_string(),
        name: name.to_string(),
        base: base.to_string(),
      },
      (_, BranchAction::Pull, _) => Self::Pull {
        executable: executable.to_string(),
        command,
        remote: remote.unwrap_or_default().to_string(),
        name: name.to_string(),
      },
      _ => Self::Branch {
        executable: executable.to_string(),
        command,
        action,
        name: name.to_string(),
      },
    }
  }

  /// The argument vector handed to the process runner.
  ///
  /// An empty remote is omitted rather than passed as an empty argument, so
  /// `feature pull` without a remote degrades to the default shape.
  pub fn argv(&self) -> Vec<String> {
    match self {
      Self::Version { executable } => vec![executable.clone(), "flow".into(), "version".into()],
      Self::Init { executable } => vec![executable.clone(), "flow".into(), "init".into(), "-d".into()],
      Self::List { executable, command } => vec![
        executable.clone(),
        "flow".into(),
        command.as_str().into(),
        "list".into(),
      ],
      Self::Branch {
        executable,
        command,
        action,
        name,
      } => vec![
        executable.clone(),
        "flow".into(),
        command.as_str().into(),
        action.as_str().into(),
        name.clone(),
      ],
      Self::HotfixStart { executable, name, base } => vec![
        executable.clone(),
        "flow".into(),
        "hotfix".into(),
        "start".into(),
        name.clone(),
        base.clone(),
      ],
      Self::Pull {
        executable,
        command,
        remote,
        name,
      } => {
        let mut argv = vec![
          executable.clone(),
          "flow".into(),
          command.as_str().into(),
          "pull".into(),
        ];
        if !remote.is_empty() {
          argv.push(remote.clone());
        }
        argv.push(name.clone());
        argv
      }
    }
  }
}

impl fmt::Display for CommandLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.argv().join(" "))
  }
}
