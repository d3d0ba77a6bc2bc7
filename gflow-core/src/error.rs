//! # Error Taxonomy
//!
//! Fatal error kinds surfaced by the flow driver. Every failure aborts the
//! whole request; there are no retry or partial-recovery paths, so each
//! variant carries enough context for the caller to fix the underlying
//! condition and re-run.

use std::io;

use thiserror::Error;

/// Errors produced while validating or executing a flow request.
#[derive(Debug, Error)]
pub enum FlowError {
  /// The external tool exited non-zero. Carries the exact command text that
  /// was attempted and the tool's raw stderr.
  #[error("`{command}` failed: {stderr}")]
  ExternalTool { command: String, stderr: String },

  /// The request is missing a parameter required by the selected
  /// command/action combination. Raised before any process is spawned.
  #[error("{0}")]
  Validation(String),

  /// The executable could not be spawned at all.
  #[error("failed to execute `{command}`")]
  Spawn {
    command: String,
    #[source]
    source: io::Error,
  },
}
