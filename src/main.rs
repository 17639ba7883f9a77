//! netlab - graph and network algorithms for the classroom
//!
//! Shortest paths, minimum spanning trees and distance-vector routing over
//! small weighted graphs, with step-by-step traces, plus the CRC and Hamming
//! codecs taught alongside them.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use netlab_core::error::{ExitCode as NetlabExitCode, NetlabError};
use netlab_core::logging;

fn main() -> ExitCode {
    let started = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json_errors() => return clap_failure_as_json(err),
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?started.elapsed(), "arguments parsed");

    match commands::dispatch::run(&cli, started) {
        Ok(()) => ExitCode::from(NetlabExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

/// Print a failed command's error in the requested format
fn report(cli: &Cli, error: &NetlabError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Clap rejected the arguments, so `cli.format` was never read; scripts
/// that asked for JSON still get a JSON error on stderr.
fn clap_failure_as_json(err: clap::Error) -> ExitCode {
    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => NetlabError::UsageError(err.to_string()),
        _ => NetlabError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Raw argv scan for `--format json` or `--format=json`
fn wants_json_errors() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
