//! CLI argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::domain::Ide;

/// BMad Method installer - Install and manage BMad Method agents
#[derive(Parser, Debug)]
#[command(name = "bmad")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print the installer version
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install BMad Method agents and tools
    Install(InstallArgs),

    /// Update existing BMad installation
    Update {
        /// Force update, overwriting modified files
        #[arg(long)]
        force: bool,
        /// Show what would be updated without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// List available agents
    List,

    /// Show installation status
    Status,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallArgs {
    /// Install complete .bmad-core folder
    #[arg(short, long)]
    pub full: bool,

    /// Install specific agent with dependencies
    #[arg(short, long, value_name = "ID")]
    pub agent: Option<String>,

    /// Installation directory (default: .bmad-core)
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub directory: Option<String>,

    /// Configure for IDE(s) (cursor, claude-code, windsurf, roo)
    #[arg(short = 'i', long = "ide", value_name = "IDE", num_args = 1..)]
    pub ides: Vec<Ide>,
}

impl InstallArgs {
    /// Without `--full` or `--agent` the install is configured interactively.
    pub fn is_interactive(&self) -> bool {
        !self.full && self.agent.is_none()
    }
}
