//! Command dispatch logic for netlab

use std::time::Instant;

use crate::cli::Cli;
use netlab_core::config::NetlabConfig;
use netlab_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub(crate) use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command_always;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = NetlabConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
