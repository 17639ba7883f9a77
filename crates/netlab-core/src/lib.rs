//! netlab Core Library
//!
//! Graph algorithm engine for the netlab classroom tool: the topology model,
//! shortest paths, minimum spanning trees, distance-vector routing and the
//! small error-detection codecs shown alongside them.

pub mod coding;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod topology;
