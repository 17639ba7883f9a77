//! Adjacency derivation shared by every engine

use std::collections::HashMap;

use serde::Serialize;

use crate::topology::types::{NodeId, Topology};

/// One entry of a node's adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: NodeId,
    pub weight: f64,
}

/// Mapping from node identity to its `(neighbor, weight)` list.
///
/// An edge `{A, B, w}` contributes `{B, w}` to A's list and `{A, w}` to B's.
/// Parallel edges are all kept. Lists exist only for nodes of the graph; an
/// edge endpoint that names no node gets no list of its own.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    lists: HashMap<NodeId, Vec<Neighbor>>,
}

impl AdjacencyMap {
    pub fn build(topology: &Topology) -> Self {
        let mut lists: HashMap<NodeId, Vec<Neighbor>> = topology
            .node_ids()
            .map(|id| (id.clone(), Vec::new()))
            .collect();

        for edge in &topology.edges {
            if let Some(list) = lists.get_mut(&edge.from) {
                list.push(Neighbor {
                    id: edge.to.clone(),
                    weight: edge.weight,
                });
            }
            if let Some(list) = lists.get_mut(&edge.to) {
                list.push(Neighbor {
                    id: edge.from.clone(),
                    weight: edge.weight,
                });
            }
        }

        tracing::trace!(nodes = lists.len(), edges = topology.edges.len(), "adjacency_built");
        Self { lists }
    }

    /// Neighbours of `id`; unknown nodes have none
    pub fn neighbors(&self, id: &NodeId) -> &[Neighbor] {
        self.lists.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct neighbour identities of `id` that are themselves graph
    /// nodes, in first-seen order
    pub fn neighbor_ids(&self, id: &NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = Vec::new();
        for neighbor in self.neighbors(id) {
            if &neighbor.id != id
                && self.lists.contains_key(&neighbor.id)
                && !ids.contains(&neighbor.id)
            {
                ids.push(neighbor.id.clone());
            }
        }
        ids
    }

    /// Cheapest direct link weight from `from` to `to`
    pub fn direct_weight(&self, from: &NodeId, to: &NodeId) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .filter(|neighbor| &neighbor.id == to)
            .map(|neighbor| neighbor.weight)
            .min_by(f64::total_cmp)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.lists.contains_key(id)
    }
}
