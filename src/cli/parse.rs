//! Value parsers for CLI arguments

use netlab_core::graph::Strategy;
use netlab_core::topology::{IdScheme, NodeId};

/// A `--set-weight A-B=W` edit
#[derive(Debug, Clone, PartialEq)]
pub struct WeightEdit {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// A `--remove-edge A-B` target
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePair {
    pub from: NodeId,
    pub to: NodeId,
}

/// Parse distance-vector strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse identity scheme from string
pub fn parse_scheme(s: &str) -> std::result::Result<IdScheme, String> {
    s.parse::<IdScheme>().map_err(|e| e.to_string())
}

/// Parse `A-B` into an edge pair
pub fn parse_edge_pair(s: &str) -> std::result::Result<EdgePair, String> {
    let (from, to) = s
        .split_once('-')
        .ok_or_else(|| format!("expected FROM-TO, got '{}'", s))?;

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("missing node in '{}'", s));
    }

    Ok(EdgePair {
        from: NodeId::from(from),
        to: NodeId::from(to),
    })
}

/// Parse `A-B=W` into a weight edit
pub fn parse_weight_edit(s: &str) -> std::result::Result<WeightEdit, String> {
    let (pair, weight) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FROM-TO=WEIGHT, got '{}'", s))?;
    let EdgePair { from, to } = parse_edge_pair(pair)?;

    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{}'", weight))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight must be a finite non-negative number, got {}", weight));
    }

    Ok(WeightEdit { from, to, weight })
}
