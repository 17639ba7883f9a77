use crate::cli::support::{netlab, GraphDir, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    netlab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: netlab"))
        .stdout(predicate::str::contains("dijkstra"))
        .stdout(predicate::str::contains("prim"))
        .stdout(predicate::str::contains("dv"));
}

#[test]
fn test_version_flag() {
    netlab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netlab"));
}

#[test]
fn test_no_command_prints_banner() {
    netlab()
        .assert()
        .success()
        .stdout(predicate::str::contains("netlab --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    netlab()
        .args(["--format", "xml", "crc", "1101", "11"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    netlab()
        .args(["--format", "json", "prim", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_graph_flag() {
    netlab()
        .env_remove("NETLAB_GRAPH")
        .args(["prim"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph given"));
}

#[test]
fn test_graph_from_env() {
    let graph = GraphDir::new(TRIANGLE);
    netlab()
        .env("NETLAB_GRAPH", &graph.graph)
        .args(["--quiet", "prim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: 3"));
}

#[test]
fn test_graph_from_stdin() {
    netlab()
        .args(["--graph", "-", "dijkstra", "--from", "A", "--to", "C"])
        .write_stdin(TRIANGLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 3"));
}

#[test]
fn test_graph_file_not_found() {
    let dir = tempdir().unwrap();
    netlab()
        .arg("--graph")
        .arg(dir.path().join("missing.json"))
        .args(["prim"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

const NEGATIVE_EDGE: &str = r#"{"nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}], "edges": [{"from": "A", "to": "B", "weight": 2}, {"from": "B", "to": "C", "weight": -1}, {"from": "A", "to": "C", "weight": 3}]}"#;

#[test]
fn test_negative_weight_rejected_by_routing_commands() {
    let graph = GraphDir::new(NEGATIVE_EDGE);
    for args in [vec!["dijkstra", "--from", "A"], vec!["dv"]] {
        graph
            .cmd()
            .args(&args)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("invalid graph"))
            .stderr(predicate::str::contains("negative weight"));
    }
}

#[test]
fn test_negative_weight_accepted_by_prim() {
    let graph = GraphDir::new(NEGATIVE_EDGE);
    graph
        .cmd()
        .args(["prim", "--start", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A-B(2)"))
        .stdout(predicate::str::contains("B-C(-1)"))
        .stdout(predicate::str::contains("Total weight: 1"));
}

#[test]
fn test_duplicate_node_rejected() {
    let graph = GraphDir::new(r#"{"nodes": [{"id": "A"}, {"id": "A"}], "edges": []}"#);
    graph
        .cmd()
        .args(["--format", "json", "prim"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"duplicate_node\""));
}

#[test]
fn test_quiet_suppresses_error_text() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--quiet", "dijkstra", "--from", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_phases() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--log-level", "debug", "prim"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_config"));
}
