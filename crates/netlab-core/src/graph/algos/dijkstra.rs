use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::graph::algos::shared::Cost;
use crate::graph::types::{DijkstraStep, ShortestPathResult};
use crate::topology::{AdjacencyMap, Edge, NodeId, Topology};

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: BTreeMap<NodeId, Cost>,
    previous: BTreeMap<NodeId, Option<NodeId>>,
    visited: BTreeSet<NodeId>,
    /// Unvisited candidates, kept in graph node order until sorted
    queue: Vec<NodeId>,
    steps: Vec<DijkstraStep>,
}

impl DijkstraState {
    fn new(topology: &Topology, source: &NodeId) -> Self {
        let mut distances = BTreeMap::new();
        let mut previous = BTreeMap::new();
        for id in topology.node_ids() {
            distances.insert(id.clone(), Cost::INFINITY);
            previous.insert(id.clone(), None);
        }
        distances.insert(source.clone(), Cost::ZERO);

        Self {
            distances,
            previous,
            visited: BTreeSet::new(),
            queue: topology.node_ids().cloned().collect(),
            steps: Vec::new(),
        }
    }

    fn distance(&self, id: &NodeId) -> Cost {
        self.distances.get(id).copied().unwrap_or(Cost::INFINITY)
    }

    /// Remove and return the nearest candidate. The sort is stable, so ties
    /// go to whichever node came first in the current queue order.
    fn extract_nearest(&mut self) -> Option<NodeId> {
        let distances = &self.distances;
        let dist = |id: &NodeId| distances.get(id).copied().unwrap_or(Cost::INFINITY);
        self.queue.sort_by(|a, b| dist(a).total_cmp(&dist(b)));

        if self.queue.is_empty() {
            None
        } else {
            Some(self.queue.remove(0))
        }
    }

    fn record(&mut self, current: &NodeId) {
        self.steps.push(DijkstraStep {
            iteration: self.steps.len(),
            current: current.clone(),
            distances: self.distances.clone(),
            previous: self.previous.clone(),
            visited: self.visited.clone(),
            queue: self.queue.clone(),
        });
    }

    fn relax_neighbors(&mut self, current: &NodeId, adjacency: &AdjacencyMap) {
        let base = self.distance(current);
        for neighbor in adjacency.neighbors(current) {
            if !self.queue.contains(&neighbor.id) {
                continue;
            }
            let candidate = base + Cost::new(neighbor.weight);
            if candidate < self.distance(&neighbor.id) {
                tracing::trace!(
                    node = %neighbor.id,
                    via = %current,
                    distance = %candidate,
                    "relax"
                );
                self.distances.insert(neighbor.id.clone(), candidate);
                self.previous
                    .insert(neighbor.id.clone(), Some(current.clone()));
            }
        }
    }
}

/// Walk predecessors back from `target`. Yields `[target]` when the chain
/// does not lead to `source`.
fn reconstruct_path(
    source: &NodeId,
    target: &NodeId,
    previous: &BTreeMap<NodeId, Option<NodeId>>,
) -> Vec<NodeId> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        match previous.get(current).and_then(Option::as_ref) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    if path.first() != Some(source) {
        return vec![target.clone()];
    }
    path
}

/// Consecutive path nodes were joined by a relaxed link, so each pair has a
/// direct weight; the cheapest parallel link is the one relaxation used.
fn path_edges(path: &[NodeId], adjacency: &AdjacencyMap) -> Vec<Edge> {
    path.windows(2)
        .filter_map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            adjacency
                .direct_weight(from, to)
                .map(|weight| Edge::new(from.clone(), to.clone(), weight))
        })
        .collect()
}

/// Dijkstra shortest paths from `source`, optionally stopping once `target`
/// is extracted.
///
/// Every extraction appends a [`DijkstraStep`] holding independent copies of
/// the distance, predecessor, visited and queue state. Unreached nodes keep
/// an infinite distance and no predecessor. Negative weights are rejected.
#[tracing::instrument(skip_all, fields(source = %source, target = ?target, nodes = topology.node_count()))]
pub fn dijkstra(
    topology: &Topology,
    source: &NodeId,
    target: Option<&NodeId>,
) -> Result<ShortestPathResult> {
    topology.require_node(source)?;
    if let Some(target) = target {
        topology.require_node(target)?;
    }
    topology.require_non_negative_weights()?;

    let adjacency = topology.adjacency();
    let mut state = DijkstraState::new(topology, source);

    while let Some(current) = state.extract_nearest() {
        state.visited.insert(current.clone());
        state.record(&current);

        if target == Some(&current) {
            tracing::trace!(node = %current, "target reached");
            break;
        }

        state.relax_neighbors(&current, &adjacency);
    }

    let (found, path, edges, total_distance) = match target {
        Some(target) => {
            let distance = state.distance(target);
            let path = reconstruct_path(source, target, &state.previous);
            let edges = path_edges(&path, &adjacency);
            (distance.is_finite(), path, edges, Some(distance))
        }
        None => (false, Vec::new(), Vec::new(), None),
    };

    tracing::debug!(
        iterations = state.steps.len(),
        found,
        hops = edges.len(),
        "dijkstra complete"
    );

    Ok(ShortestPathResult {
        source: source.clone(),
        target: target.cloned(),
        found,
        path,
        path_edges: edges,
        total_distance,
        distances: state.distances,
        previous: state.previous,
        steps: state.steps,
    })
}
