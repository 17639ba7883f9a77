//! Reading graph files (JSON, TOML or YAML)

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{NetlabError, Result};
use crate::topology::types::Topology;

/// Serialization of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Toml,
    Yaml,
}

impl GraphFormat {
    /// Pick the format from a file extension; unknown extensions are JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => GraphFormat::Toml,
            Some("yaml") | Some("yml") => GraphFormat::Yaml,
            _ => GraphFormat::Json,
        }
    }
}

impl FromStr for GraphFormat {
    type Err = NetlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(GraphFormat::Json),
            "toml" => Ok(GraphFormat::Toml),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            other => Err(NetlabError::unsupported(
                "graph format",
                other,
                "json, toml, yaml",
            )),
        }
    }
}

impl Topology {
    /// Parse and validate a graph document
    pub fn parse(content: &str, format: GraphFormat) -> Result<Self> {
        let topology: Topology = match format {
            GraphFormat::Json => serde_json::from_str(content)?,
            GraphFormat::Toml => toml::from_str(content)?,
            GraphFormat::Yaml => serde_yaml::from_str(content)?,
        };
        topology.validate()?;
        Ok(topology)
    }

    /// Load a graph file; `-` reads JSON from stdin
    pub fn load(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            return Self::parse(&content, GraphFormat::Json);
        }

        if !path.exists() {
            return Err(NetlabError::GraphNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let topology = Self::parse(&content, GraphFormat::from_path(path))?;
        tracing::debug!(
            path = %path.display(),
            nodes = topology.node_count(),
            edges = topology.edges.len(),
            "graph_loaded"
        );
        Ok(topology)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
