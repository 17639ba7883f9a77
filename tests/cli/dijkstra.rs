use crate::cli::support::{stdout_json, GraphDir, TRIANGLE, TWO_COMPONENTS};
use predicates::prelude::*;

#[test]
fn test_dijkstra_triangle_path() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["dijkstra", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path A -> C: A -> B -> C"))
        .stdout(predicate::str::contains("Total distance: 3"))
        .stdout(predicate::str::contains("Edges: A-B(1), B-C(2)"))
        .stdout(predicate::str::contains("Steps:"));
}

#[test]
fn test_dijkstra_quiet_hides_steps() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--quiet", "dijkstra", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 3"))
        .stdout(predicate::str::contains("Steps:").not());
}

#[test]
fn test_dijkstra_json() {
    let graph = GraphDir::new(TRIANGLE);
    let output = graph
        .cmd()
        .args(["--format", "json", "dijkstra", "--from", "A", "--to", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["total_distance"].as_f64(), Some(3.0));
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    assert_eq!(json["steps"][0]["current"], "A");
}

#[test]
fn test_dijkstra_unreachable_target() {
    let graph = GraphDir::new(TWO_COMPONENTS);
    graph
        .cmd()
        .args(["dijkstra", "--from", "A", "--to", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from A to D"));

    let output = graph
        .cmd()
        .args(["--format", "json", "dijkstra", "--from", "A", "--to", "D"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!(["D"]));
    assert!(json["distances"]["D"].is_null());
}

#[test]
fn test_dijkstra_full_tree() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--quiet", "dijkstra", "--from", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances from A:"))
        .stdout(predicate::str::is_match(r"C\s+3\s+via B").unwrap());
}

#[test]
fn test_dijkstra_records() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--format", "records", "dijkstra", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H netlab=1 records=1 mode=dijkstra source=A target=C found=true distance=3 steps=3",
        ))
        .stdout(predicate::str::contains("E A B weight=1"))
        .stdout(predicate::str::contains("E B C weight=2"))
        .stdout(predicate::str::contains("D C distance=3 via=B"));
}

#[test]
fn test_dijkstra_unknown_node_exit_code() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["dijkstra", "--from", "A", "--to", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: Z"));
}

#[test]
fn test_dijkstra_reads_yaml_graph() {
    let graph = GraphDir::with_name(
        "graph.yaml",
        "nodes:\n  - id: A\n  - id: B\nedges:\n  - from: A\n    to: B\n    weight: 4\n",
    );
    graph
        .cmd()
        .args(["dijkstra", "--from", "A", "--to", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 4"));
}
