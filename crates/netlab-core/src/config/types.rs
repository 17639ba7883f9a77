//! Configuration type definitions

use crate::graph::algos::distance_vector::Strategy;
use crate::topology::IdScheme;
use serde::{Deserialize, Serialize};

/// netlab configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetlabConfig {
    /// Identity scheme for generated and inserted nodes
    #[serde(default)]
    pub id_scheme: IdScheme,

    /// Distance-vector engine settings
    #[serde(default)]
    pub distance_vector: DistanceVectorConfig,

    /// Canvas geometry used by generated layouts
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Configuration for distance-vector propagation and the watch driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceVectorConfig {
    /// Propagation strategy used after a node update
    #[serde(default)]
    pub strategy: Strategy,

    /// Maximum rounds the watch driver runs before giving up
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,

    /// Delay between watch driver rounds, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for DistanceVectorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_rounds: default_max_rounds(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_max_rounds() -> usize {
    64
}

fn default_interval_ms() -> u64 {
    500
}

/// Canvas geometry for circular layouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Circle radius as a fraction of the smaller canvas half-extent
    #[serde(default = "default_radius_factor")]
    pub radius_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            radius_factor: default_radius_factor(),
        }
    }
}

fn default_width() -> f64 {
    600.0
}

fn default_height() -> f64 {
    400.0
}

fn default_radius_factor() -> f64 {
    0.7
}
