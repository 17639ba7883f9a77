//! Distance-vector routing
//!
//! Every node owns a [`RoutingTable`] and improves it only by relaxing
//! against its neighbours' tables. The collection is passed in explicitly
//! and mutated in place; nothing else persists between calls.
//!
//! - `table`: routes, per-node tables, and the table collection
//! - `relax`: the relaxation rule and the three propagation strategies
//! - `edits`: adjusting tables after a topology edit
//! - `driver`: the step-until-stable driver

mod driver;
mod edits;
mod relax;
mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NetlabError, Result};
use crate::topology::{NodeId, Topology, TopologyChange};

pub use driver::{RoundOutcome, StabilizationDriver};
pub use edits::apply_change;
pub use table::{Route, RoutingTable, RoutingTables};

use relax::Relaxer;

/// How changes spread after a node's table is relaxed. All three reach the
/// same fixed point on a static graph with positive weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Worklist seeded with the start node; changed nodes queue their
    /// neighbours
    #[default]
    Queue,
    /// Full passes over every node until a pass changes nothing
    Batch,
    /// Depth-first re-relaxation of neighbours after every change
    Recursive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Queue, Strategy::Batch, Strategy::Recursive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Queue => "queue",
            Strategy::Batch => "batch",
            Strategy::Recursive => "recursive",
        }
    }
}

impl FromStr for Strategy {
    type Err = NetlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "queue" | "bfs" => Ok(Strategy::Queue),
            "batch" | "sync" => Ok(Strategy::Batch),
            "recursive" | "dfs" => Ok(Strategy::Recursive),
            other => Err(NetlabError::unsupported(
                "strategy",
                other,
                "queue, batch, recursive",
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Before/after snapshot of one node relaxation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DvStep {
    pub node: NodeId,
    pub before: RoutingTable,
    pub after: RoutingTable,
    pub changed: bool,
}

/// Relaxations performed by one operation, in processing order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DvTrace {
    pub strategy: Strategy,
    pub steps: Vec<DvStep>,
}

impl DvTrace {
    /// Whether any relaxation changed a table
    pub fn changed(&self) -> bool {
        self.steps.iter().any(|step| step.changed)
    }

    pub fn changed_steps(&self) -> impl Iterator<Item = &DvStep> {
        self.steps.iter().filter(|step| step.changed)
    }
}

/// Relax from `seeds` with `strategy`; `None` seeds every node in graph order.
fn run(
    topology: &Topology,
    tables: &mut RoutingTables,
    strategy: Strategy,
    seeds: Option<&[NodeId]>,
) -> DvTrace {
    let every_node: Vec<NodeId>;
    let worklist = match seeds {
        Some(seeds) => seeds,
        None => {
            every_node = topology.node_ids().cloned().collect();
            every_node.as_slice()
        }
    };

    let mut relaxer = Relaxer::new(topology, tables);
    match strategy {
        Strategy::Queue => relaxer.propagate_queue(worklist),
        Strategy::Batch => relaxer.propagate_batch(seeds.unwrap_or_default()),
        Strategy::Recursive => relaxer.propagate_recursive(worklist),
    }

    let trace = DvTrace {
        strategy,
        steps: relaxer.steps,
    };
    tracing::debug!(
        %strategy,
        relaxations = trace.steps.len(),
        changed = trace.changed_steps().count(),
        "distance-vector run complete"
    );
    trace
}

/// Relax `node`'s table and propagate the effect with `strategy`.
///
/// Tables for nodes not yet in `tables` are created from the graph's direct
/// links as they are reached.
#[tracing::instrument(skip_all, fields(node = %node, strategy = %strategy))]
pub fn update_node(
    topology: &Topology,
    tables: &mut RoutingTables,
    node: &NodeId,
    strategy: Strategy,
) -> Result<DvTrace> {
    topology.require_node(node)?;
    Ok(run(topology, tables, strategy, Some(std::slice::from_ref(node))))
}

/// Relax every node until no table changes
#[tracing::instrument(skip_all, fields(strategy = %strategy, nodes = topology.node_count()))]
pub fn converge(topology: &Topology, tables: &mut RoutingTables, strategy: Strategy) -> DvTrace {
    let adjacency = topology.adjacency();
    for id in topology.node_ids() {
        tables.ensure(topology, &adjacency, id);
    }
    run(topology, tables, strategy, None)
}

/// Apply `change` to the tables, then re-relax from every node whose
/// routes it can affect.
///
/// The edit rewrites the endpoints' tables directly, so both endpoints and
/// all of their current neighbours seed one run. A node removal has no
/// surviving endpoint to start from, so every remaining node is relaxed
/// instead.
#[tracing::instrument(skip_all, fields(change = %change))]
pub fn handle_change(
    topology: &Topology,
    tables: &mut RoutingTables,
    change: &TopologyChange,
    strategy: Strategy,
) -> Result<DvTrace> {
    if let TopologyChange::NodeRemoved { .. } = change {
        apply_change(topology, tables, change);
        return Ok(converge(topology, tables, strategy));
    }

    for endpoint in change.endpoints() {
        topology.require_node(endpoint)?;
    }
    apply_change(topology, tables, change);

    let seeds = change_seeds(topology, change);
    tracing::debug!(seeds = seeds.len(), "re-relaxing around edit");
    Ok(run(topology, tables, strategy, Some(&seeds)))
}

/// Endpoints of `change` followed by their neighbours, first occurrence kept
fn change_seeds(topology: &Topology, change: &TopologyChange) -> Vec<NodeId> {
    let adjacency = topology.adjacency();
    let mut seeds: Vec<NodeId> = Vec::new();
    let endpoints = change.endpoints();
    let touched = endpoints
        .iter()
        .map(|endpoint| (*endpoint).clone())
        .chain(endpoints.iter().flat_map(|endpoint| adjacency.neighbor_ids(endpoint)));
    for node in touched {
        if !seeds.contains(&node) {
            seeds.push(node);
        }
    }
    seeds
}
