use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::algos::shared::Cost;
use crate::topology::{AdjacencyMap, NodeId, Topology};

/// One routing table entry: best known distance and the neighbour to
/// forward through
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub distance: Cost,
    pub next_hop: Option<NodeId>,
}

impl Route {
    pub fn unreachable() -> Self {
        Self {
            distance: Cost::INFINITY,
            next_hop: None,
        }
    }

    pub fn via(distance: Cost, next_hop: NodeId) -> Self {
        Self {
            distance,
            next_hop: Some(next_hop),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// A single node's view of the network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingTable {
    pub node: NodeId,
    pub routes: BTreeMap<NodeId, Route>,
}

impl RoutingTable {
    /// Fresh table for `node`: itself at 0, direct neighbours at the
    /// cheapest link weight, everything else unreachable
    pub fn base(topology: &Topology, adjacency: &AdjacencyMap, node: &NodeId) -> Self {
        let routes = topology
            .node_ids()
            .map(|dest| {
                let route = if dest == node {
                    Route::via(Cost::ZERO, node.clone())
                } else {
                    match adjacency.direct_weight(node, dest) {
                        Some(weight) => Route::via(Cost::new(weight), dest.clone()),
                        None => Route::unreachable(),
                    }
                };
                (dest.clone(), route)
            })
            .collect();

        Self {
            node: node.clone(),
            routes,
        }
    }

    pub fn route(&self, dest: &NodeId) -> Option<&Route> {
        self.routes.get(dest)
    }

    /// Recorded distance to `dest`; missing entries count as unreachable
    pub fn distance_to(&self, dest: &NodeId) -> Cost {
        self.routes
            .get(dest)
            .map(|route| route.distance)
            .unwrap_or(Cost::INFINITY)
    }

    pub fn next_hop(&self, dest: &NodeId) -> Option<&NodeId> {
        self.routes.get(dest).and_then(|route| route.next_hop.as_ref())
    }

    pub fn destinations(&self) -> impl Iterator<Item = &NodeId> {
        self.routes.keys()
    }

    pub(crate) fn set(&mut self, dest: NodeId, route: Route) {
        self.routes.insert(dest, route);
    }
}

/// The per-node table collection passed explicitly into every
/// distance-vector operation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RoutingTables {
    tables: BTreeMap<NodeId, RoutingTable>,
}

impl RoutingTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base tables for every node of the graph
    pub fn build(topology: &Topology) -> Self {
        let adjacency = topology.adjacency();
        let tables = topology
            .node_ids()
            .map(|id| (id.clone(), RoutingTable::base(topology, &adjacency, id)))
            .collect();
        Self { tables }
    }

    pub fn get(&self, node: &NodeId) -> Option<&RoutingTable> {
        self.tables.get(node)
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.tables.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables in identity order
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &RoutingTable)> {
        self.tables.iter()
    }

    /// Distance from `from` to `to` as recorded in `from`'s table
    pub fn distance(&self, from: &NodeId, to: &NodeId) -> Cost {
        self.tables
            .get(from)
            .map(|table| table.distance_to(to))
            .unwrap_or(Cost::INFINITY)
    }

    /// Create a base table for `node` unless one exists
    pub(crate) fn ensure(&mut self, topology: &Topology, adjacency: &AdjacencyMap, node: &NodeId) {
        if !self.tables.contains_key(node) {
            tracing::trace!(node = %node, "creating routing table");
            self.tables
                .insert(node.clone(), RoutingTable::base(topology, adjacency, node));
        }
    }

    pub(crate) fn get_mut(&mut self, node: &NodeId) -> Option<&mut RoutingTable> {
        self.tables.get_mut(node)
    }

    pub(crate) fn insert(&mut self, table: RoutingTable) {
        self.tables.insert(table.node.clone(), table);
    }

    pub(crate) fn remove(&mut self, node: &NodeId) -> Option<RoutingTable> {
        self.tables.remove(node)
    }

    pub(crate) fn tables_mut(&mut self) -> impl Iterator<Item = &mut RoutingTable> {
        self.tables.values_mut()
    }
}
