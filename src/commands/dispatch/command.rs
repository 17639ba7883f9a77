//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use netlab_core::config::NetlabConfig;
use netlab_core::error::Result;
use netlab_core::topology::{NodeId, Topology};

use super::trace_command_always;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: NetlabConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: NetlabConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the graph named by `--graph`
    pub fn load_topology(&self) -> Result<Topology> {
        let Some(path) = &self.cli.graph else {
            netlab_core::bail_usage!("no graph given (use --graph <file> or set NETLAB_GRAPH)");
        };
        let topology = Topology::load(path)?;
        trace_command_always!(self.start, "load_graph");
        Ok(topology)
    }

    /// Load the graph and refuse runs on fewer than `min` nodes
    pub fn load_topology_with_min(&self, min: usize, command: &str) -> Result<Topology> {
        let topology = self.load_topology()?;
        if topology.node_count() < min {
            netlab_core::bail_usage!(format!(
                "{} needs at least {} nodes, graph has {}",
                command,
                min,
                topology.node_count()
            ));
        }
        Ok(topology)
    }
}

/// Resolve a node argument against the graph
pub fn resolve_node(topology: &Topology, raw: &str) -> Result<NodeId> {
    let id = NodeId::from(raw.trim());
    topology.require_node(&id)?;
    Ok(id)
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("netlab {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph and network algorithms for the classroom.");
        println!();
        println!("Run `netlab --help` for usage information.");
        Ok(())
    }
}
