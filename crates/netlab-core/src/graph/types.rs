use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::graph::algos::shared::{total_weight, Cost};
use crate::topology::{Edge, NodeId};

/// Snapshot taken after one Dijkstra extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraStep {
    pub iteration: usize,
    /// Node extracted in this iteration
    pub current: NodeId,
    pub distances: BTreeMap<NodeId, Cost>,
    pub previous: BTreeMap<NodeId, Option<NodeId>>,
    pub visited: BTreeSet<NodeId>,
    /// Remaining candidates, nearest first
    pub queue: Vec<NodeId>,
}

/// Outcome of a Dijkstra run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult {
    pub source: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
    /// Whether `target` was reached (always false without a target)
    pub found: bool,
    /// Node sequence source..target. A single node when the target was not
    /// reached or equals the source; empty without a target.
    pub path: Vec<NodeId>,
    /// Edges along `path`, oriented source to target
    pub path_edges: Vec<Edge>,
    /// Distance to the target (infinite when unreached)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<Cost>,
    pub distances: BTreeMap<NodeId, Cost>,
    pub previous: BTreeMap<NodeId, Option<NodeId>>,
    pub steps: Vec<DijkstraStep>,
}

impl ShortestPathResult {
    pub fn distance_to(&self, id: &NodeId) -> Cost {
        self.distances.get(id).copied().unwrap_or(Cost::INFINITY)
    }

    /// Shortest-path tree edges (predecessor to node) for every reached node
    pub fn tree_edges(&self) -> Vec<Edge> {
        self.previous
            .iter()
            .filter_map(|(node, pred)| {
                let pred = pred.as_ref()?;
                let weight = self.distance_to(node).value() - self.distance_to(pred).value();
                Some(Edge::new(pred.clone(), node.clone(), weight))
            })
            .collect()
    }
}

/// What happened to the candidate edge taken from the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimAction {
    /// Edge joined the tree
    Kept,
    /// Endpoint was already in the tree; edge discarded
    Skipped,
}

/// Snapshot taken after one Prim pool extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimStep {
    pub iteration: usize,
    pub edge: Edge,
    pub action: PrimAction,
    pub tree: Vec<Edge>,
    pub visited: BTreeSet<NodeId>,
    /// Remaining candidate pool, cheapest first
    pub candidates: Vec<Edge>,
}

/// Outcome of a Prim run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTreeResult {
    pub start: NodeId,
    /// Tree edges in the order they were added
    pub edges: Vec<Edge>,
    pub total_weight: Cost,
    /// Nodes spanned (the start node's component)
    pub visited: BTreeSet<NodeId>,
    /// Whether every graph node was reached
    pub spanning: bool,
    pub steps: Vec<PrimStep>,
}

impl SpanningTreeResult {
    pub(crate) fn new(
        start: NodeId,
        edges: Vec<Edge>,
        visited: BTreeSet<NodeId>,
        node_count: usize,
        steps: Vec<PrimStep>,
    ) -> Self {
        let total = total_weight(&edges);
        let spanning = visited.len() == node_count;
        Self {
            start,
            edges,
            total_weight: total,
            visited,
            spanning,
            steps,
        }
    }
}
