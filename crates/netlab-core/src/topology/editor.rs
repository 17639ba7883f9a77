//! Collaborator-owned graph state with change notifications
//!
//! The editor holds the node and edge lists a UI builds interactively. Each
//! successful edit notifies subscribers with the new topology and the change
//! that produced it, so dependants such as routing tables can react.

use std::fmt;

use serde::Serialize;

use crate::error::{NetlabError, Result};
use crate::topology::ids::IdScheme;
use crate::topology::types::{Edge, Node, NodeId, Topology};

/// A single applied edit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologyChange {
    NodeAdded { id: NodeId },
    NodeRemoved { id: NodeId },
    EdgeAdded { from: NodeId, to: NodeId, weight: f64 },
    EdgeRemoved { from: NodeId, to: NodeId },
    WeightChanged { from: NodeId, to: NodeId, weight: f64 },
}

impl TopologyChange {
    /// Nodes whose direct links changed
    pub fn endpoints(&self) -> Vec<&NodeId> {
        match self {
            TopologyChange::NodeAdded { id } | TopologyChange::NodeRemoved { id } => vec![id],
            TopologyChange::EdgeAdded { from, to, .. }
            | TopologyChange::EdgeRemoved { from, to }
            | TopologyChange::WeightChanged { from, to, .. } => vec![from, to],
        }
    }
}

impl fmt::Display for TopologyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyChange::NodeAdded { id } => write!(f, "added node {}", id),
            TopologyChange::NodeRemoved { id } => write!(f, "removed node {}", id),
            TopologyChange::EdgeAdded { from, to, weight } => {
                write!(f, "added edge {}-{} weight {}", from, to, weight)
            }
            TopologyChange::EdgeRemoved { from, to } => write!(f, "removed edge {}-{}", from, to),
            TopologyChange::WeightChanged { from, to, weight } => {
                write!(f, "set weight of {}-{} to {}", from, to, weight)
            }
        }
    }
}

/// Handle returned by [`TopologyEditor::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Topology, &TopologyChange)>;

pub struct TopologyEditor {
    topology: Topology,
    scheme: IdScheme,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for TopologyEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopologyEditor")
            .field("topology", &self.topology)
            .field("scheme", &self.scheme)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TopologyEditor {
    pub fn new(scheme: IdScheme) -> Self {
        Self::from_topology(Topology::default(), scheme)
    }

    pub fn from_topology(topology: Topology, scheme: IdScheme) -> Self {
        Self {
            topology,
            scheme,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    /// Register a callback run after every successful edit
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Topology, &TopologyChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Place a new node with the next free identity of the editor's scheme
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let id = self.scheme.next_id(self.topology.node_ids());
        self.topology.nodes.push(Node::at(id.clone(), x, y));
        self.emit(TopologyChange::NodeAdded { id: id.clone() });
        id
    }

    /// Insert a node with a caller-chosen identity
    pub fn insert_node(&mut self, node: Node) -> Result<()> {
        if self.topology.contains(&node.id) {
            return Err(NetlabError::DuplicateNode {
                id: node.id.to_string(),
            });
        }
        let id = node.id.clone();
        self.topology.nodes.push(node);
        self.emit(TopologyChange::NodeAdded { id });
        Ok(())
    }

    /// Delete a node together with every edge touching it
    pub fn remove_node(&mut self, id: &NodeId) -> Result<()> {
        self.topology.require_node(id)?;
        self.topology.nodes.retain(|node| &node.id != id);
        self.topology.edges.retain(|edge| !edge.touches(id));
        self.emit(TopologyChange::NodeRemoved { id: id.clone() });
        Ok(())
    }

    pub fn add_edge(&mut self, from: &NodeId, to: &NodeId, weight: f64) -> Result<()> {
        self.topology.require_node(from)?;
        self.topology.require_node(to)?;
        if from == to {
            crate::bail_usage!(format!("cannot link node {} to itself", from));
        }
        check_weight(weight)?;

        self.topology
            .edges
            .push(Edge::new(from.clone(), to.clone(), weight));
        self.emit(TopologyChange::EdgeAdded {
            from: from.clone(),
            to: to.clone(),
            weight,
        });
        Ok(())
    }

    /// Set the weight of every edge between `from` and `to`
    pub fn set_edge_weight(&mut self, from: &NodeId, to: &NodeId, weight: f64) -> Result<()> {
        check_weight(weight)?;
        let mut touched = 0;
        for edge in self
            .topology
            .edges
            .iter_mut()
            .filter(|edge| edge.connects(from, to))
        {
            edge.weight = weight;
            touched += 1;
        }
        if touched == 0 {
            return Err(NetlabError::not_found("edge", format!("{}-{}", from, to)));
        }
        self.emit(TopologyChange::WeightChanged {
            from: from.clone(),
            to: to.clone(),
            weight,
        });
        Ok(())
    }

    /// Delete every edge between `from` and `to`
    pub fn remove_edge(&mut self, from: &NodeId, to: &NodeId) -> Result<()> {
        let before = self.topology.edges.len();
        self.topology.edges.retain(|edge| !edge.connects(from, to));
        if self.topology.edges.len() == before {
            return Err(NetlabError::not_found("edge", format!("{}-{}", from, to)));
        }
        self.emit(TopologyChange::EdgeRemoved {
            from: from.clone(),
            to: to.clone(),
        });
        Ok(())
    }

    fn emit(&mut self, change: TopologyChange) {
        tracing::debug!(%change, subscribers = self.subscribers.len(), "topology_changed");
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.topology, &change);
        }
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        crate::bail_invalid!("edge weight", weight);
    }
    Ok(())
}
