//! # Result Contract
//!
//! The structured outcome reported to the caller for one request. Exactly
//! one report is produced per request; absent fields are omitted from the
//! JSON rendering.

use serde::Serialize;

use crate::inventory::BranchInventory;

/// Outcome of one flow request.
#[derive(Debug, Clone, Serialize)]
pub struct FlowReport {
  /// Whether the repository was mutated.
  pub changed: bool,
  /// Exact command text this request resolved to.
  pub command: String,
  /// Tool output accompanying the outcome. git-flow writes its human
  /// summary to stderr, so this is stderr text even on success.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub msg: Option<String>,
  /// Installed git-flow version; only set by the version command.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  /// Branch inventory; only set by the list action.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub branches: Option<BranchInventory>,
}

impl FlowReport {
  /// The repository was already in the target state; nothing ran.
  pub const fn unchanged(command: String) -> Self {
    Self {
      changed: false,
      command,
      msg: None,
      version: None,
      branches: None,
    }
  }

  /// The mutating command ran successfully.
  pub const fn changed(command: String, msg: String) -> Self {
    Self {
      changed: true,
      command,
      msg: Some(msg),
      version: None,
      branches: None,
    }
  }

  /// Outcome of the fixed version command.
  pub const fn version(command: String, version: String) -> Self {
    Self {
      changed: false,
      command,
      msg: None,
      version: Some(version),
      branches: None,
    }
  }

  /// Outcome of the read-only list action.
  pub const fn branches(command: String, branches: BranchInventory) -> Self {
    Self {
      changed: false,
      command,
      msg: None,
      version: None,
      branches: Some(branches),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::inventory::parse_inventory;

  #[test]
  fn test_unset_fields_are_omitted_from_json() {
    let report = FlowReport::unchanged("git flow feature start foo".to_string());
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["changed"], false);
    assert_eq!(json["command"], "git flow feature start foo");
    assert!(json.get("msg").is_none());
    assert!(json.get("version").is_none());
    assert!(json.get("branches").is_none());
  }

  #[test]
  fn test_branches_serialize_as_list_and_current() {
    let report = FlowReport::branches(
      "git flow feature list".to_string(),
      parse_inventory("  feature/a\n* feature/b"),
    );
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["branches"]["list"], serde_json::json!(["feature/a", "feature/b"]));
    assert_eq!(json["branches"]["current"], serde_json::json!(["feature/b"]));
  }

  #[test]
  fn test_changed_report_carries_the_tool_message() {
    let report = FlowReport::changed(
      "git flow feature start foo".to_string(),
      "Switched to a new branch 'feature/foo'\n".to_string(),
    );
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["changed"], true);
    assert_eq!(json["msg"], "Switched to a new branch 'feature/foo'\n");
  }
}
