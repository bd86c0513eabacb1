//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Write the reference catalogue from the templates
//! - `sync`: Extract, then reconcile every locale catalogue
//! - `merge`: Reconcile one locale against an existing reference catalogue
//! - `stats`: Show translation progress per locale
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Repository root
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Templates directory, relative to the root (overrides config file)
    #[arg(long)]
    pub templates_root: Option<PathBuf>,

    /// Catalogue directory, relative to the root (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locales to reconcile (default: every catalogue in the messages directory)
    /// Can be specified multiple times: --locale de --locale fr
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Do not write anything; exit with status 1 if any catalogue is out of date
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Locale catalogue to update (its ISO code)
    pub locale: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Reference catalogue file, relative to the messages directory
    #[arg(long)]
    pub reference: Option<String>,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locales to report (default: all)
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable messages from the templates into the reference catalogue
    Extract(ExtractCommand),
    /// Extract messages and reconcile every locale catalogue with them
    Sync(SyncCommand),
    /// Reconcile one locale catalogue with the existing reference catalogue
    Merge(MergeCommand),
    /// Show how many messages each locale has translated
    Stats(StatsCommand),
    /// Initialize a new .l10nrc.json configuration file
    Init,
}
