use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TRIANGLE: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
    "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "A", "to": "C", "weight": 5}
    ]
}"#;

pub const TWO_COMPONENTS: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"id": "D"}],
    "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "C", "to": "D", "weight": 1}
    ]
}"#;

/// Get a Command for netlab, isolated from the user's config directory
pub fn netlab() -> Command {
    let mut cmd = cargo_bin_cmd!("netlab");
    cmd.env(
        "NETLAB_CONFIG_DIR",
        std::env::temp_dir().join("netlab-tests-no-config"),
    );
    cmd
}

/// A scratch directory holding one graph file. Commands built from it
/// point `NETLAB_CONFIG_DIR` inside the directory.
pub struct GraphDir {
    pub dir: TempDir,
    pub graph: PathBuf,
}

impl GraphDir {
    pub fn new(content: &str) -> Self {
        Self::with_name("graph.json", content)
    }

    pub fn with_name(name: &str, content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let graph = dir.path().join(name);
        fs::write(&graph, content).unwrap();
        Self { dir, graph }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = netlab();
        cmd.env("NETLAB_CONFIG_DIR", self.config_dir())
            .env_remove("NETLAB_GRAPH")
            .env_remove("RUST_LOG")
            .env_remove("NETLAB_LOG")
            .arg("--graph")
            .arg(&self.graph);
        cmd
    }
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
