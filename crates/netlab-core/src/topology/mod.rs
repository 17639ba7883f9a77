//! Graph Model shared by every engine
//!
//! - `types`: node identities, nodes, undirected weighted edges, `Topology`
//! - `adjacency`: per-node neighbour lists derived for each run
//! - `ids`: numeric and alphabetic identity schemes
//! - `editor`: collaborator-owned editing with change subscribers
//! - `layout`: circular placement for generated graphs
//! - `load`: JSON/TOML/YAML graph files

pub mod adjacency;
pub mod editor;
pub mod ids;
pub mod layout;
pub mod load;
pub mod types;

pub use adjacency::{AdjacencyMap, Neighbor};
pub use editor::{SubscriptionId, TopologyChange, TopologyEditor};
pub use ids::IdScheme;
pub use layout::circular_layout;
pub use load::GraphFormat;
pub use types::{Edge, Node, NodeId, Topology};
