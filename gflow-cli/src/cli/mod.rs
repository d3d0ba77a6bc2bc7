//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the gflow tool: one
//! subcommand per git-flow workflow command, plus shared rendering of the
//! structured result.

mod branch;
mod init;
mod version;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use gflow_core::output::{ColorMode, format_command, print_info, print_success};
use gflow_core::report::FlowReport;

/// Top-level CLI command for the gflow tool
#[derive(Parser)]
#[command(name = "gflow")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "An idempotent driver for git-flow branch operations")]
#[command(
  long_about = "gflow wraps the git-flow extension in a state-checking front-end.\n\n\
        Before running a mutating branch operation it reads the current branch\n\
        inventory and reports 'no change' when the repository is already in the\n\
        requested state, which makes every operation safe to re-run."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Emit the structured result as JSON instead of human-readable output
  #[arg(long, global = true)]
  pub json: bool,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the gflow tool
#[derive(Subcommand)]
pub enum Commands {
  /// Report the installed git-flow version
  #[command(long_about = "Report the version of the installed git-flow extension.\n\n\
            This never changes the repository and is the only command that does\n\
            not need a repository path.")]
  Version(version::VersionArgs),

  /// Initialize a repository for git-flow
  #[command(long_about = "Initialize a repository for git-flow with default branch names.\n\n\
            Reports 'no change' when the repository was already initialized.")]
  Init(init::InitArgs),

  /// Feature branch operations
  #[command(long_about = "Run a git-flow feature branch action.\n\n\
            start/finish/checkout are idempotent: when the branch inventory shows\n\
            the target state already holds, nothing is executed. The pull action\n\
            accepts a --remote to pull from.")]
  #[command(alias = "feat")]
  Feature(branch::FeatureArgs),

  /// Release branch operations
  #[command(long_about = "Run a git-flow release branch action.\n\n\
            The branch name is usually a version number, e.g. 'gflow release\n\
            start 1.5'. start/finish/checkout are idempotent.")]
  #[command(alias = "rel")]
  Release(branch::ReleaseArgs),

  /// Hotfix branch operations
  #[command(long_about = "Run a git-flow hotfix branch action.\n\n\
            The start action accepts a --base branch to cut the hotfix from.\n\
            start/finish/checkout are idempotent.")]
  #[command(alias = "fix")]
  Hotfix(branch::HotfixArgs),
}

/// Handle the parsed CLI invocation
pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
    }
  }

  let json = cli.json;
  match cli.command {
    Commands::Version(args) => version::handle_version_command(args, json),
    Commands::Init(args) => init::handle_init_command(args, json),
    Commands::Feature(args) => branch::handle_feature_command(args, json),
    Commands::Release(args) => branch::handle_release_command(args, json),
    Commands::Hotfix(args) => branch::handle_hotfix_command(args, json),
  }
}

/// Render a flow report for the user
pub(crate) fn render_report(report: &FlowReport, json: bool) -> Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(report)?);
    return Ok(());
  }

  if let Some(version) = &report.version {
    println!("{version}");
  } else if let Some(branches) = &report.branches {
    for branch in &branches.all {
      if branches.current.iter().any(|current| current == branch) {
        println!("* {branch}");
      } else {
        println!("  {branch}");
      }
    }
  } else if report.changed {
    print_success(&format!("ran {}", format_command(&report.command)));
    if let Some(msg) = report.msg.as_deref().map(str::trim).filter(|msg| !msg.is_empty()) {
      println!("{msg}");
    }
  } else {
    print_info(&format!(
      "already in the requested state, skipped {}",
      format_command(&report.command)
    ));
  }

  Ok(())
}
