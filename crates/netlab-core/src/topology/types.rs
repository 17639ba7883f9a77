use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NetlabError, Result};
use crate::topology::adjacency::AdjacencyMap;

/// Opaque node identity.
///
/// Collaborators pick their own scheme (`0, 1, 2` or `A, B, C`); the engine
/// only compares and hashes identities. Ordering puts numeric labels first,
/// compared by value, then everything else lexically, so sorted displays read
/// `2, 10` rather than `10, 2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id.to_string())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Graph files may spell identities as strings or integers
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => NodeId(text),
            RawId::Int(value) => NodeId(value.to_string()),
        })
    }
}

/// A labelled point on the canvas. Position is presentation-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn at(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }
}

/// Undirected weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Whether this edge joins `a` and `b`, in either orientation
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }

    pub fn touches(&self, id: &NodeId) -> bool {
        &self.from == id || &self.to == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint
    pub fn other_end(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.from == id {
            Some(&self.to)
        } else if &self.to == id {
            Some(&self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}({})",
            self.from,
            self.to,
            crate::graph::algos::shared::Cost::new(self.weight)
        )
    }
}

/// Graph Model: nodes plus undirected edges referencing them by identity.
///
/// Built fresh from collaborator state before every algorithm run and never
/// mutated by the engines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Topology {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Build a topology from `(from, to, weight)` triples; nodes are created
    /// in first-seen order at the origin.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B, f64)>,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        let mut topology = Topology::default();
        for (from, to, weight) in edges {
            let edge = Edge::new(from, to, weight);
            for id in [&edge.from, &edge.to] {
                if !topology.contains(id) {
                    topology.nodes.push(Node::new(id.clone()));
                }
            }
            topology.edges.push(edge);
        }
        topology
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|node| &node.id == id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    /// Node identities in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|node| &node.id)
    }

    /// Fail with `UnknownNode` unless `id` is part of the graph
    pub fn require_node(&self, id: &NodeId) -> Result<()> {
        if !self.contains(id) {
            crate::bail_unknown_node!(id);
        }
        Ok(())
    }

    /// Edges with `id` as an endpoint, in edge order
    pub fn incident_edges<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| edge.touches(id))
    }

    /// Derive the adjacency map used by the engines
    pub fn adjacency(&self) -> AdjacencyMap {
        AdjacencyMap::build(self)
    }

    /// Check the invariants a loaded graph must satisfy: unique identities
    /// and finite weights. Dangling endpoints are allowed, and so are
    /// negative weights, which only the routing engines reject.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(&node.id) {
                return Err(NetlabError::DuplicateNode {
                    id: node.id.to_string(),
                });
            }
        }

        for edge in &self.edges {
            if !edge.weight.is_finite() {
                return Err(NetlabError::invalid_graph(format!(
                    "edge {}-{} has weight {} (expected a finite number)",
                    edge.from, edge.to, edge.weight
                )));
            }
        }

        Ok(())
    }

    /// Fail on the first negative edge weight. Dijkstra and distance-vector
    /// routing need this; Prim does not care about sign.
    pub fn require_non_negative_weights(&self) -> Result<()> {
        match self.edges.iter().find(|edge| edge.weight < 0.0) {
            Some(edge) => Err(NetlabError::invalid_graph(format!(
                "edge {}-{} has negative weight {}",
                edge.from, edge.to, edge.weight
            ))),
            None => Ok(()),
        }
    }
}
