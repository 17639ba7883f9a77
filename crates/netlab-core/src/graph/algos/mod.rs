//! Graph algorithm implementations
//!
//! Contains the engines built on the Graph Model:
//! - `dijkstra`: shortest paths with per-extraction snapshots
//! - `prim`: minimum spanning tree with kept/skipped trace
//! - `distance_vector`: per-node routing tables and propagation strategies
//! - `shared`: the `Cost` type and helpers used by several engines

pub mod dijkstra;
pub mod distance_vector;
pub mod prim;
pub mod shared;

pub use dijkstra::dijkstra;
pub use distance_vector::{
    apply_change, converge, handle_change, update_node, DvStep, DvTrace, RoundOutcome, Route,
    RoutingTable, RoutingTables, StabilizationDriver, Strategy,
};
pub use prim::prim;
pub use shared::{total_weight, Cost};
