pub mod coding;
pub mod config;
pub mod dijkstra;
pub mod dv;
pub mod errors;
pub mod generate;
pub mod prim;
pub mod support;
