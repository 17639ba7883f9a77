//! Shared rendering helpers for human and records output

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use netlab_core::error::Result;
use netlab_core::format::join_display;
use netlab_core::graph::Cost;
use netlab_core::topology::{Edge, NodeId};

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `{A, B, C}` in identity order
pub fn format_set(ids: &BTreeSet<NodeId>) -> String {
    format!("{{{}}}", join_display(ids))
}

/// `[B, C]` keeping the given order
pub fn format_list(ids: &[NodeId]) -> String {
    format!("[{}]", join_display(ids))
}

pub fn format_edges(edges: &[Edge]) -> String {
    format!("[{}]", join_display(edges))
}

/// `A=0 B=1 C=∞` in identity order
pub fn format_distances(distances: &BTreeMap<NodeId, Cost>) -> String {
    distances
        .iter()
        .map(|(id, cost)| format!("{}={}", id, cost))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated ids for records output, `-` when empty
pub fn records_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// `-` for a missing node
pub fn or_dash(id: Option<&NodeId>) -> String {
    id.map(NodeId::to_string).unwrap_or_else(|| "-".to_string())
}
