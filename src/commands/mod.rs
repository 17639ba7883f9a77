//! CLI commands for netlab

pub mod coding;
pub mod config;
pub mod dijkstra;
pub mod dispatch;
pub mod dv;
pub mod generate;
pub mod prim;
pub mod render;
