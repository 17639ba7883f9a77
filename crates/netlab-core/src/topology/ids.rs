//! Identity schemes for nodes created by collaborators

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetlabError;
use crate::topology::types::NodeId;

/// How new node identities are allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// `0, 1, 2, …`
    #[default]
    Numeric,
    /// `A … Z, AA, AB, …`
    Alphabetic,
}

impl IdScheme {
    /// Label for the zero-based `index` under this scheme
    pub fn label(&self, index: u64) -> NodeId {
        match self {
            IdScheme::Numeric => NodeId::from(index.to_string()),
            IdScheme::Alphabetic => NodeId::from(alphabetic_label(index)),
        }
    }

    /// Zero-based index of `id` under this scheme, if it belongs to it
    pub fn index_of(&self, id: &NodeId) -> Option<u64> {
        match self {
            IdScheme::Numeric => id.as_str().parse().ok(),
            IdScheme::Alphabetic => alphabetic_index(id.as_str()),
        }
    }

    /// Smallest label of this scheme not used by `existing`; gaps left by
    /// deleted nodes are reused.
    pub fn next_id<'a, I>(&self, existing: I) -> NodeId
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        let used: HashSet<u64> = existing
            .into_iter()
            .filter_map(|id| self.index_of(id))
            .collect();
        let mut index = 0;
        while used.contains(&index) {
            index += 1;
        }
        self.label(index)
    }
}

impl FromStr for IdScheme {
    type Err = NetlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(IdScheme::Numeric),
            "alphabetic" | "alpha" | "letters" => Ok(IdScheme::Alphabetic),
            other => Err(NetlabError::unsupported(
                "id scheme",
                other,
                "numeric, alphabetic",
            )),
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdScheme::Numeric => write!(f, "numeric"),
            IdScheme::Alphabetic => write!(f, "alphabetic"),
        }
    }
}

// Spreadsheet-column labels: 0 -> A, 25 -> Z, 26 -> AA
fn alphabetic_label(index: u64) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn alphabetic_index(label: &str) -> Option<u64> {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let mut n: u64 = 0;
    for b in label.bytes() {
        n = n.checked_mul(26)?.checked_add(u64::from(b - b'A') + 1)?;
    }
    Some(n - 1)
}
