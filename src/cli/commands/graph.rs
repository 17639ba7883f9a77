//! Graph algorithm command arguments

use clap::Args;

use crate::cli::parse::{
    parse_edge_pair, parse_scheme, parse_strategy, parse_weight_edit, EdgePair, WeightEdit,
};
use netlab_core::graph::Strategy;
use netlab_core::topology::IdScheme;

/// Arguments for the dijkstra command.
#[derive(Args, Debug)]
pub struct DijkstraArgs {
    /// Source node
    #[arg(long)]
    pub from: String,

    /// Target node; without it the whole shortest-path tree is reported
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the prim command.
#[derive(Args, Debug)]
pub struct PrimArgs {
    /// Start node (defaults to the first node of the graph)
    #[arg(long)]
    pub start: Option<String>,
}

/// Arguments for the dv command.
#[derive(Args, Debug)]
pub struct DvArgs {
    /// Only print this node's routing table
    #[arg(long)]
    pub node: Option<String>,

    /// Propagation strategy (queue, batch, recursive); overrides the config
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Remove a node after convergence (can be repeated)
    #[arg(long, action = clap::ArgAction::Append)]
    pub remove_node: Vec<String>,

    /// Remove every link between two nodes after convergence, as `A-B`
    /// (can be repeated)
    #[arg(long, value_parser = parse_edge_pair, action = clap::ArgAction::Append)]
    pub remove_edge: Vec<EdgePair>,

    /// Add a link after convergence, as `A-B=W` (can be repeated)
    #[arg(long, value_parser = parse_weight_edit, action = clap::ArgAction::Append)]
    pub add_edge: Vec<WeightEdit>,

    /// Change a link weight after convergence, as `A-B=W` (can be repeated)
    #[arg(long, value_parser = parse_weight_edit, action = clap::ArgAction::Append)]
    pub set_weight: Vec<WeightEdit>,

    /// Converge with the round-by-round driver instead of a single run
    #[arg(long)]
    pub watch: bool,

    /// Round cap for --watch (overrides the config)
    #[arg(long)]
    pub max_rounds: Option<usize>,

    /// Delay between --watch rounds in milliseconds (overrides the config)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of nodes
    #[arg(long, short)]
    pub nodes: usize,

    /// Identity scheme (numeric, alphabetic); overrides the config
    #[arg(long, value_parser = parse_scheme)]
    pub scheme: Option<IdScheme>,
}
