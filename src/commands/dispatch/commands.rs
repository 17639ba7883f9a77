//! Command implementations for all netlab commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use netlab_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{
        ConfigCommands, CrcArgs, DijkstraArgs, DvArgs, GenerateArgs, HammingArgs, PrimArgs,
    };
    use crate::commands::dispatch::command::resolve_node;
    use crate::commands::dispatch::trace_command_always;
    use crate::commands::{coding, config, dijkstra, dv, generate, prim};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let result = match cmd {
            Commands::Dijkstra(args) => execute_dijkstra(ctx, args),
            Commands::Prim(args) => execute_prim(ctx, args),
            Commands::Dv(args) => execute_dv(ctx, args),
            Commands::Generate(args) => execute_generate(ctx, args),
            Commands::Crc(args) => execute_crc(ctx, args),
            Commands::Hamming(args) => execute_hamming(ctx, args),
            Commands::Config { command } => execute_config(ctx, command),
        };
        trace_command_always!(ctx.start, "execute_command");
        result
    }

    fn execute_dijkstra(ctx: &CommandContext, args: &DijkstraArgs) -> Result<()> {
        let topology = ctx.load_topology_with_min(2, "dijkstra")?;
        let source = resolve_node(&topology, &args.from)?;
        let target = args
            .to
            .as_deref()
            .map(|raw| resolve_node(&topology, raw))
            .transpose()?;
        dijkstra::execute(ctx.cli, &topology, &source, target.as_ref())
    }

    fn execute_prim(ctx: &CommandContext, args: &PrimArgs) -> Result<()> {
        let topology = ctx.load_topology_with_min(2, "prim")?;
        let start = match args.start.as_deref() {
            Some(raw) => resolve_node(&topology, raw)?,
            None => topology.nodes[0].id.clone(),
        };
        prim::execute(ctx.cli, &topology, &start)
    }

    fn execute_dv(ctx: &CommandContext, args: &DvArgs) -> Result<()> {
        let topology = ctx.load_topology()?;
        let node = args
            .node
            .as_deref()
            .map(|raw| resolve_node(&topology, raw))
            .transpose()?;
        let settings = &ctx.config.distance_vector;
        let options = dv::DvOptions {
            node,
            strategy: args.strategy.unwrap_or(settings.strategy),
            remove_nodes: args.remove_node.iter().map(|raw| raw.trim().into()).collect(),
            remove_edges: args.remove_edge.clone(),
            add_edges: args.add_edge.clone(),
            set_weights: args.set_weight.clone(),
            watch: args.watch,
            max_rounds: args.max_rounds.unwrap_or(settings.max_rounds),
            interval_ms: args.interval_ms.unwrap_or(settings.interval_ms),
        };
        dv::execute(ctx.cli, topology, ctx.config.id_scheme, &options)
    }

    fn execute_generate(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
        let scheme = args.scheme.unwrap_or(ctx.config.id_scheme);
        generate::execute(ctx.cli, args.nodes, scheme, &ctx.config.layout)
    }

    fn execute_crc(ctx: &CommandContext, args: &CrcArgs) -> Result<()> {
        coding::execute_crc(ctx.cli, &args.frame, &args.generator, args.flip)
    }

    fn execute_hamming(ctx: &CommandContext, args: &HammingArgs) -> Result<()> {
        coding::execute_hamming(ctx.cli, &args.bits, args.correct)
    }

    fn execute_config(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => config::execute_show(ctx.cli, &ctx.config),
            ConfigCommands::Init { force } => config::execute_init(ctx.cli, *force),
            ConfigCommands::Path => config::execute_path(ctx.cli),
        }
    }
}
