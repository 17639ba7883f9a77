//! Network algorithms over the Graph Model
//!
//! Every engine takes a `Topology` by reference, never mutates it, and
//! returns its result together with an ordered step trace:
//! - Dijkstra shortest path
//! - Prim minimum spanning tree
//! - Distance-vector routing over an explicitly passed table collection

pub mod algos;
pub mod types;

pub use algos::{
    converge, dijkstra, handle_change, prim, update_node, Cost, DvStep, DvTrace, RoundOutcome,
    Route, RoutingTable, RoutingTables, StabilizationDriver, Strategy,
};
pub use types::{DijkstraStep, PrimAction, PrimStep, ShortestPathResult, SpanningTreeResult};
