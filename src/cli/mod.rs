//! CLI argument parsing for netlab
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --config, --format, --quiet, --verbose

pub mod commands;
pub mod format;
pub mod output;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{
    Commands, ConfigCommands, CrcArgs, DijkstraArgs, DvArgs, GenerateArgs, HammingArgs, PrimArgs,
};
pub use output::OutputFormat;

/// netlab - graph and network algorithms for the classroom
#[derive(Parser, Debug)]
#[command(name = "netlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (.json, .toml, .yaml); `-` reads JSON from stdin
    #[arg(long, short, global = true, env = "NETLAB_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Configuration file (defaults to the netlab config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = output::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output (step traces, progress)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log phase timings and engine decisions at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
