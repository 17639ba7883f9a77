use crate::cli::support::{stdout_json, GraphDir, TRIANGLE, TWO_COMPONENTS};
use predicates::prelude::*;

const SQUARE: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"id": "D"}],
    "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "C", "to": "D", "weight": 3},
        {"from": "A", "to": "D", "weight": 4},
        {"from": "A", "to": "C", "weight": 5}
    ]
}"#;

#[test]
fn test_prim_triangle() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["prim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum spanning tree from A"))
        .stdout(predicate::str::contains("A-B(1)"))
        .stdout(predicate::str::contains("B-C(2)"))
        .stdout(predicate::str::contains("Total weight: 3"));
}

#[test]
fn test_prim_json_weight_matches_from_any_start() {
    let graph = GraphDir::new(SQUARE);
    for start in ["A", "B", "C", "D"] {
        let output = graph
            .cmd()
            .args(["--format", "json", "prim", "--start", start])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["total_weight"].as_f64(), Some(6.0), "start {start}");
        assert_eq!(json["edges"].as_array().unwrap().len(), 3);
        assert_eq!(json["spanning"], true);
    }
}

#[test]
fn test_prim_records_mark_skipped_edges() {
    let graph = GraphDir::new(SQUARE);
    graph
        .cmd()
        .args(["--format", "records", "prim", "--start", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=prim start=A edges=3 weight=6 spanning=true"))
        .stdout(predicate::str::contains(" kept A B weight=1"));
}

#[test]
fn test_prim_disconnected_covers_start_component() {
    let graph = GraphDir::new(TWO_COMPONENTS);
    graph
        .cmd()
        .args(["--quiet", "prim", "--start", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("covers 2 of 4 nodes"))
        .stdout(predicate::str::contains("C-D(1)"));
}

#[test]
fn test_prim_needs_two_nodes() {
    let graph = GraphDir::new(r#"{"nodes": [{"id": "A"}], "edges": []}"#);
    graph
        .cmd()
        .args(["prim"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 2 nodes"));
}
