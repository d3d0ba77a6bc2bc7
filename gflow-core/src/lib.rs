//! # gflow Core Library
//!
//! Command construction, branch inventory parsing, and the idempotency
//! decision logic behind the `gflow` command-line tool. Everything that
//! touches the external git-flow tool goes through the
//! [`runner::CommandRunner`] capability, so the decision logic stays pure
//! and testable without spawning real processes.

pub mod command;
pub mod driver;
pub mod error;
pub mod gate;
pub mod inventory;
pub mod output;
pub mod report;
pub mod runner;

// Re-export the main types for CLI and test consumers
pub use command::{BranchAction, CommandLine, WorkflowCommand};
pub use driver::{DEFAULT_EXECUTABLE, FlowRequest, run_flow};
pub use error::FlowError;
pub use gate::should_skip;
pub use inventory::{BranchInventory, list_branches, parse_inventory};
pub use output::{ColorMode, format_command, print_error, print_info, print_success, print_warning};
pub use report::FlowReport;
pub use runner::{CommandRunner, ProcessOutput, SystemRunner};
