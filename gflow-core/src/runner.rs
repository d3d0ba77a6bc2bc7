//! # Process Execution
//!
//! Narrow capability seam for spawning the external git-flow tool and
//! capturing its output. The driver and inventory reader only ever see
//! [`CommandRunner`], so unit tests inject a scripted fake instead of
//! spawning real processes.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::command::CommandLine;
use crate::error::FlowError;

/// Captured output of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
  /// Process exit code; `-1` when the process was terminated without one.
  pub code: i32,
  /// Captured stdout, lossily decoded as UTF-8.
  pub stdout: String,
  /// Captured stderr, lossily decoded as UTF-8.
  pub stderr: String,
}

impl ProcessOutput {
  /// Whether the process exited with status code 0.
  pub const fn success(&self) -> bool {
    self.code == 0
  }
}

/// Capability for running one external command to completion.
///
/// Implementations must support a working directory independent of the
/// caller's own; every git-flow invocation except `version` runs inside the
/// target repository.
pub trait CommandRunner {
  /// Run `command` to completion, optionally inside `cwd`, and capture its
  /// exit code and output.
  fn run(&self, command: &CommandLine, cwd: Option<&Path>) -> Result<ProcessOutput, FlowError>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, command: &CommandLine, cwd: Option<&Path>) -> Result<ProcessOutput, FlowError> {
    let argv = command.argv();
    debug!(command = %command, cwd = ?cwd, "spawning external tool");

    // argv always starts with the executable by construction
    let mut child = Command::new(&argv[0]);
    child.args(&argv[1..]);
    if let Some(dir) = cwd {
      child.current_dir(dir);
    }

    let output = child.output().map_err(|source| FlowError::Spawn {
      command: command.to_string(),
      source,
    })?;

    Ok(ProcessOutput {
      code: output.status.code().unwrap_or(-1),
      stdout: String::from_utf8_lossy(&output.stdout).to_string(),
      stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_success_reflects_exit_code() {
    let ok = ProcessOutput {
      code: 0,
      stdout: String::new(),
      stderr: String::new(),
    };
    assert!(ok.success());

    let failed = ProcessOutput { code: 1, ..ok };
    assert!(!failed.success());
  }

  #[test]
  fn test_spawn_failure_is_reported_with_command_text() {
    let runner = SystemRunner;
    let command = CommandLine::version("definitely-not-a-real-executable");

    let err = runner.run(&command, None).expect_err("spawn should fail");
    match err {
      FlowError::Spawn { command, .. } => {
        assert_eq!(command, "definitely-not-a-real-executable flow version");
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }
}
