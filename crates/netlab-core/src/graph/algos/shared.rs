use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Accumulated path cost. Unreached entries hold [`Cost::INFINITY`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order used for candidate selection; infinities compare equal
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if !self.0.is_finite() {
            "∞".to_string()
        } else if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            (self.0 as i64).to_string()
        } else {
            self.0.to_string()
        };
        f.pad(&text)
    }
}

// Infinity has no JSON spelling, so unreached costs serialize as null
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?
            .map(Cost)
            .unwrap_or(Cost::INFINITY))
    }
}

/// Sum of edge weights, as a `Cost`
pub fn total_weight<'a, I>(edges: I) -> Cost
where
    I: IntoIterator<Item = &'a crate::topology::Edge>,
{
    Cost(edges.into_iter().map(|edge| edge.weight).sum())
}
