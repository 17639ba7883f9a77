use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::types::{PrimAction, PrimStep, SpanningTreeResult};
use crate::topology::{AdjacencyMap, Edge, NodeId, Topology};

/// State tracked during a Prim run
struct PrimState {
    tree: Vec<Edge>,
    visited: BTreeSet<NodeId>,
    /// Crossing edges oriented away from the tree, in insertion order
    pool: Vec<Edge>,
    steps: Vec<PrimStep>,
}

impl PrimState {
    fn new(start: &NodeId) -> Self {
        Self {
            tree: Vec::new(),
            visited: BTreeSet::from([start.clone()]),
            pool: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Queue every edge from `node` to a graph node outside the tree
    fn enqueue_from(&mut self, node: &NodeId, adjacency: &AdjacencyMap) {
        for neighbor in adjacency.neighbors(node) {
            if self.visited.contains(&neighbor.id) || !adjacency.contains(&neighbor.id) {
                continue;
            }
            self.pool
                .push(Edge::new(node.clone(), neighbor.id.clone(), neighbor.weight));
        }
    }

    /// Stable ascending sort by weight; equal weights keep pool order
    fn sort_pool(&mut self) {
        self.pool.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    }

    fn take_cheapest(&mut self) -> Option<Edge> {
        self.sort_pool();
        if self.pool.is_empty() {
            None
        } else {
            Some(self.pool.remove(0))
        }
    }

    fn record(&mut self, edge: Edge, action: PrimAction) {
        self.sort_pool();
        self.steps.push(PrimStep {
            iteration: self.steps.len(),
            edge,
            action,
            tree: self.tree.clone(),
            visited: self.visited.clone(),
            candidates: self.pool.clone(),
        });
    }
}

/// Prim minimum spanning tree grown from `start`.
///
/// Edges are returned in the order they joined the tree, oriented from the
/// tree side. On a disconnected graph the tree covers only the start node's
/// component and `spanning` is false.
#[tracing::instrument(skip_all, fields(start = %start, nodes = topology.node_count()))]
pub fn prim(topology: &Topology, start: &NodeId) -> Result<SpanningTreeResult> {
    topology.require_node(start)?;

    let adjacency = topology.adjacency();
    let node_count = topology.node_count();
    let mut state = PrimState::new(start);
    state.enqueue_from(start, &adjacency);

    while state.visited.len() < node_count {
        let Some(edge) = state.take_cheapest() else {
            tracing::trace!(visited = state.visited.len(), "candidate pool exhausted");
            break;
        };

        if state.visited.contains(&edge.to) {
            tracing::trace!(edge = %edge, "skip");
            state.record(edge, PrimAction::Skipped);
            continue;
        }

        tracing::trace!(edge = %edge, "keep");
        let reached = edge.to.clone();
        state.tree.push(edge.clone());
        state.visited.insert(reached.clone());
        state.enqueue_from(&reached, &adjacency);
        state.record(edge, PrimAction::Kept);
    }

    let result = SpanningTreeResult::new(
        start.clone(),
        state.tree,
        state.visited,
        node_count,
        state.steps,
    );

    tracing::debug!(
        iterations = result.steps.len(),
        edges = result.edges.len(),
        spanning = result.spanning,
        "prim complete"
    );

    Ok(result)
}
