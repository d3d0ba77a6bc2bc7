//! # Branch Inventory
//!
//! Reads which git-flow branches of a given command type exist and which one
//! is currently checked out, by running the tool's read-only `list`
//! invocation and parsing its output. The inventory is rebuilt on every
//! request and never persisted.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::command::{CommandLine, WorkflowCommand};
use crate::error::FlowError;
use crate::runner::CommandRunner;

/// Marker git-flow prints in front of the checked-out branch.
const CURRENT_MARKER: &str = "* ";

/// Branches known to git-flow for one command type.
///
/// Serializes as `{list, current}`, the shape reported back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchInventory {
  /// Every branch, in listing order.
  #[serde(rename = "list")]
  pub all: Vec<String>,
  /// Branches flagged as checked out; normally exactly one.
  pub current: Vec<String>,
}

impl BranchInventory {
  /// Whether `name` exists at all.
  pub fn contains(&self, name: &str) -> bool {
    self.all.iter().any(|branch| branch == name)
  }

  /// Whether `name` is the checked-out branch.
  pub fn is_current(&self, name: &str) -> bool {
    self.current.iter().any(|branch| branch == name)
  }
}

/// Parse the stdout of `<git> flow <command> list` into an inventory.
///
/// A line starting with the `"* "` marker names the checked-out branch and
/// contributes to both `all` and `current`; every other line contributes its
/// trimmed name to `all`. Empty output yields an empty inventory, not an
/// error.
pub fn parse_inventory(stdout: &str) -> BranchInventory {
  let mut inventory = BranchInventory::default();

  for line in stdout.lines() {
    let (is_current, rest) = match line.strip_prefix(CURRENT_MARKER) {
      Some(rest) => (true, rest),
      None => (false, line),
    };

    let name = rest.trim();
    if name.is_empty() {
      continue;
    }

    inventory.all.push(name.to_string());
    if is_current {
      inventory.current.push(name.to_string());
    }
  }

  inventory
}

/// Run the read-only list invocation for `command` in `repo` and parse the
/// result.
pub fn list_branches(
  runner: &dyn CommandRunner,
  executable: &str,
  command: WorkflowCommand,
  repo: &Path,
) -> Result<BranchInventory, FlowError> {
  let list_command = CommandLine::list(executable, command);
  let output = runner.run(&list_command, Some(repo))?;

  if !output.success() {
    return Err(FlowError::ExternalTool {
      command: list_command.to_string(),
      stderr: output.stderr,
    });
  }

  let inventory = parse_inventory(&output.stdout);
  debug!(
    command = %list_command,
    branches = inventory.all.len(),
    "read branch inventory"
  );
  Ok(inventory)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_marks_current_branch() {
    let inventory = parse_inventory("  feature/a\n* feature/b\n  feature/c");

    assert_eq!(inventory.all, ["feature/a", "feature/b", "feature/c"]);
    assert_eq!(inventory.current, ["feature/b"]);
  }

  #[test]
  fn test_parse_empty_output() {
    let inventory = parse_inventory("");

    assert!(inventory.all.is_empty());
    assert!(inventory.current.is_empty());
  }

  #[test]
  fn test_parse_skips_blank_lines() {
    let inventory = parse_inventory("  feature/a\n\n  feature/b\n");

    assert_eq!(inventory.all, ["feature/a", "feature/b"]);
    assert!(inventory.current.is_empty());
  }

  #[test]
  fn test_marker_must_lead_the_line() {
    // A literal asterisk inside a branch name is not a current marker.
    let inventory = parse_inventory("  feature/keep-* -alive");

    assert_eq!(inventory.all, ["feature/keep-* -alive"]);
    assert!(inventory.current.is_empty());
  }

  #[test]
  fn test_membership_helpers() {
    let inventory = parse_inventory("  feature/a\n* feature/b");

    assert!(inventory.contains("feature/a"));
    assert!(!inventory.contains("feature/z"));
    assert!(inventory.is_current("feature/b"));
    assert!(!inventory.is_current("feature/a"));
  }

  #[test]
  fn test_serializes_with_list_key() {
    let inventory = parse_inventory("* feature/a");
    let json = serde_json::to_value(&inventory).expect("inventory serializes");

    assert_eq!(json["list"][0], "feature/a");
    assert_eq!(json["current"][0], "feature/a");
  }
}
