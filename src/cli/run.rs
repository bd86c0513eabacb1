//! Dispatch parsed arguments to the command handlers.

use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, CommandSummary, extract::extract, merge::merge, stats::stats, sync::sync,
    },
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult::new(CommandSummary::Init))
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
