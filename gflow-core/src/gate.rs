//! # Idempotency Gate
//!
//! Decides whether a mutating branch action needs to run at all. git-flow's
//! mutating commands are not naturally idempotent (re-running `start` on an
//! existing branch errors out), so the gate compares the requested target
//! state against the current inventory and lets the driver skip work that
//! would change nothing.

use crate::command::BranchAction;
use crate::inventory::BranchInventory;

/// Whether the repository is already in the state `action` would produce.
///
/// `start` of an existing branch, `finish` of a missing branch, and
/// `checkout` of the already checked-out branch are no-ops. Every other
/// action always proceeds; the inventory carries no signal about whether
/// publish, track, rebase, or pull would be redundant.
pub fn should_skip(action: BranchAction, name: &str, inventory: &BranchInventory) -> bool {
  match action {
    BranchAction::Start => inventory.contains(name),
    BranchAction::Finish => !inventory.contains(name),
    BranchAction::Checkout => inventory.is_current(name),
    BranchAction::List
    | BranchAction::Publish
    | BranchAction::Track
    | BranchAction::Rebase
    | BranchAction::Pull => false,
  }
}
