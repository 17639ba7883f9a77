use std::collections::VecDeque;

use crate::graph::algos::distance_vector::table::{Route, RoutingTables};
use crate::graph::algos::distance_vector::DvStep;
use crate::topology::{AdjacencyMap, NodeId, Topology};

/// Borrowed inputs shared by every relaxation in one run
pub(crate) struct Relaxer<'a> {
    pub topology: &'a Topology,
    pub adjacency: AdjacencyMap,
    pub tables: &'a mut RoutingTables,
    pub steps: Vec<DvStep>,
}

impl<'a> Relaxer<'a> {
    pub fn new(topology: &'a Topology, tables: &'a mut RoutingTables) -> Self {
        Self {
            topology,
            adjacency: topology.adjacency(),
            tables,
            steps: Vec::new(),
        }
    }

    fn neighbors(&self, node: &NodeId) -> Vec<NodeId> {
        self.adjacency.neighbor_ids(node)
    }

    /// Relax `node` against each neighbour's table and record a step.
    ///
    /// For every destination D of the node's table and every neighbour M, the
    /// route through M costs `table[M] + M.table[D]`; strictly cheaper routes
    /// replace the entry. The self entry is never touched.
    pub fn relax(&mut self, node: &NodeId) -> bool {
        let neighbors = self.neighbors(node);
        self.tables.ensure(self.topology, &self.adjacency, node);
        for neighbor in &neighbors {
            self.tables.ensure(self.topology, &self.adjacency, neighbor);
        }

        let Some(mut table) = self.tables.remove(node) else {
            return false;
        };
        let before = table.clone();

        let destinations: Vec<NodeId> = table.destinations().cloned().collect();
        for dest in destinations.iter().filter(|dest| *dest != node) {
            for neighbor in &neighbors {
                let candidate = table.distance_to(neighbor) + self.tables.distance(neighbor, dest);
                if candidate < table.distance_to(dest) {
                    tracing::trace!(
                        node = %node,
                        dest = %dest,
                        via = %neighbor,
                        distance = %candidate,
                        "route improved"
                    );
                    table.set(dest.clone(), Route::via(candidate, neighbor.clone()));
                }
            }
        }

        let changed = table != before;
        self.steps.push(DvStep {
            node: node.clone(),
            before,
            after: table.clone(),
            changed,
        });
        self.tables.insert(table);
        changed
    }

    /// Worklist propagation: a node that changed queues each neighbour not
    /// already waiting
    pub fn propagate_queue(&mut self, seeds: &[NodeId]) {
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        for seed in seeds {
            if !queue.contains(seed) {
                queue.push_back(seed.clone());
            }
        }

        while let Some(node) = queue.pop_front() {
            if !self.relax(&node) {
                continue;
            }
            for neighbor in self.neighbors(&node) {
                if !queue.contains(&neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    /// Full passes over every node until a pass changes nothing. Nodes in
    /// `first` are relaxed ahead of the first pass.
    pub fn propagate_batch(&mut self, first: &[NodeId]) {
        for node in first {
            self.relax(node);
        }
        while self.batch_round() {}
    }

    /// One pass over every node in graph order; returns whether any table
    /// changed
    pub fn batch_round(&mut self) -> bool {
        let nodes: Vec<NodeId> = self.topology.node_ids().cloned().collect();
        let mut changed = false;
        for node in &nodes {
            changed |= self.relax(node);
        }
        changed
    }

    /// Depth-first dispersion: when a node changes, each neighbour is
    /// relaxed (and dispersed further) before the next one. Runs on an
    /// explicit stack so deep cascades cannot exhaust the call stack.
    pub fn propagate_recursive(&mut self, seeds: &[NodeId]) {
        let mut stack: Vec<NodeId> = seeds.iter().rev().cloned().collect();
        while let Some(node) = stack.pop() {
            if self.relax(&node) {
                stack.extend(self.neighbors(&node).into_iter().rev());
            }
        }
    }
}
