//! Scripted command runner for testing
//!
//! Replays canned process outputs through the [`CommandRunner`] capability
//! and records every invocation it receives, so driver tests can assert both
//! the decisions made and the exact commands that would have run.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use gflow_core::command::CommandLine;
use gflow_core::error::FlowError;
use gflow_core::runner::{CommandRunner, ProcessOutput};

/// One invocation observed by a [`FakeRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
  /// The rendered command text.
  pub command: String,
  /// The working directory the command was asked to run in.
  pub cwd: Option<PathBuf>,
}

/// A [`CommandRunner`] that replays scripted outputs instead of spawning
/// processes.
///
/// Responses are consumed in FIFO order; running out of scripted responses
/// fails the call, which keeps tests honest about how many processes an
/// operation is allowed to spawn.
#[derive(Debug, Default)]
pub struct FakeRunner {
  responses: RefCell<VecDeque<ProcessOutput>>,
  calls: RefCell<Vec<RecordedCall>>,
}

impl FakeRunner {
  /// New runner with no scripted responses.
  pub fn new() -> Self {
    Self::default()
  }

  /// Queue the next process output to replay, builder-style.
  pub fn respond(self, code: i32, stdout: &str, stderr: &str) -> Self {
    self.responses.borrow_mut().push_back(ProcessOutput {
      code,
      stdout: stdout.to_string(),
      stderr: stderr.to_string(),
    });
    self
  }

  /// Every invocation observed so far, in order.
  pub fn calls(&self) -> Vec<RecordedCall> {
    self.calls.borrow().clone()
  }
}

impl CommandRunner for FakeRunner {
  fn run(&self, command: &CommandLine, cwd: Option<&Path>) -> Result<ProcessOutput, FlowError> {
    self.calls.borrow_mut().push(RecordedCall {
      command: command.to_string(),
      cwd: cwd.map(Path::to_path_buf),
    });

    self.responses.borrow_mut().pop_front().ok_or_else(|| FlowError::Spawn {
      command: command.to_string(),
      source: io::Error::other("no scripted response left"),
    })
  }
}
