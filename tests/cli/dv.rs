use crate::cli::support::{stdout_json, GraphDir, TRIANGLE, TWO_COMPONENTS};
use predicates::prelude::*;

const MESH: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"id": "D"}, {"id": "E"}],
    "edges": [
        {"from": "A", "to": "B", "weight": 4},
        {"from": "A", "to": "C", "weight": 1},
        {"from": "C", "to": "B", "weight": 2},
        {"from": "B", "to": "D", "weight": 5},
        {"from": "C", "to": "D", "weight": 8},
        {"from": "D", "to": "E", "weight": 3},
        {"from": "C", "to": "E", "weight": 10}
    ]
}"#;

#[test]
fn test_dv_triangle_table() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["dv", "--node", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converged with queue strategy"))
        .stdout(predicate::str::contains("Routing table for A"))
        .stdout(predicate::str::is_match(r"C\s+3\s+B").unwrap())
        .stdout(predicate::str::contains("Routing table for B").not());
}

#[test]
fn test_dv_strategies_agree() {
    let graph = GraphDir::new(MESH);
    for strategy in ["queue", "batch", "recursive"] {
        let output = graph
            .cmd()
            .args(["--format", "json", "dv", "--strategy", strategy])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["strategy"], strategy);
        let tables = json["tables"].as_array().unwrap();
        assert_eq!(tables.len(), 5);
        assert_eq!(tables[0]["node"], "A");
        assert_eq!(tables[0]["routes"]["E"]["distance"].as_f64(), Some(11.0));
        assert_eq!(tables[0]["routes"]["B"]["next_hop"], "C");
    }
}

#[test]
fn test_dv_records() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--format", "records", "dv", "--node", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H netlab=1 records=1 mode=dv strategy=queue tables=1"))
        .stdout(predicate::str::contains("R C A distance=3 next=B"))
        .stdout(predicate::str::contains("R C C distance=0 next=C"));
}

#[test]
fn test_dv_disconnected_prints_infinity() {
    let graph = GraphDir::new(TWO_COMPONENTS);
    graph
        .cmd()
        .args(["--format", "records", "dv", "--node", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R A D distance=∞ next=-"));

    let output = graph
        .cmd()
        .args(["--format", "json", "dv", "--node", "A"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert!(json["tables"][0]["routes"]["D"]["distance"].is_null());
}

#[test]
fn test_dv_set_weight_updates_routes() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--format", "records", "dv", "--set-weight", "A-C=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X \"set weight of A-C to 1\""))
        .stdout(predicate::str::contains("R A C distance=1 next=C"))
        .stdout(predicate::str::contains("R C A distance=1 next=A"))
        .stdout(predicate::str::contains("R B C distance=2 next=C"));
}

/// C only learns about the cheaper A-B link through A
#[test]
fn test_dv_set_weight_reaches_node_beyond_endpoints() {
    let graph = GraphDir::new(
        r#"{"nodes": [{"id": "C"}, {"id": "A"}, {"id": "B"}], "edges": [{"from": "C", "to": "A", "weight": 1}, {"from": "A", "to": "B", "weight": 10}]}"#,
    );
    for strategy in ["queue", "batch", "recursive"] {
        graph
            .cmd()
            .args(["--format", "records", "dv", "--node", "C", "--strategy", strategy])
            .args(["--set-weight", "A-B=1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("R C B distance=2 next=A"));
    }
}

#[test]
fn test_dv_remove_node() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["dv", "--remove-node", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("After removed node B"))
        .stdout(predicate::str::contains("Routing table for A"))
        .stdout(predicate::str::contains("Routing table for C"))
        .stdout(predicate::str::contains("Routing table for B").not());
}

#[test]
fn test_dv_add_edge_joins_components() {
    let graph = GraphDir::new(TWO_COMPONENTS);
    graph
        .cmd()
        .args(["--format", "records", "dv", "--node", "A", "--add-edge", "B-C=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X \"added edge B-C weight 1\""))
        .stdout(predicate::str::contains("R A D distance=3 next=B"));
}

#[test]
fn test_dv_remove_edge_reroutes() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["--format", "records", "dv", "--node", "A", "--remove-edge", "A-B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R A B distance=7 next=C"))
        .stdout(predicate::str::contains("R A C distance=5 next=C"));
}

#[test]
fn test_dv_edit_unknown_edge() {
    let graph = GraphDir::new(TWO_COMPONENTS);
    graph
        .cmd()
        .args(["dv", "--set-weight", "A-D=2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge not found: A-D"));
}

#[test]
fn test_dv_watch_reports_rounds() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["dv", "--watch", "--interval-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("round 1:"))
        .stdout(predicate::str::contains("Stable after 2 rounds"));
}

#[test]
fn test_dv_watch_round_cap() {
    let graph = GraphDir::new(MESH);
    let output = graph
        .cmd()
        .args([
            "--format",
            "json",
            "dv",
            "--watch",
            "--max-rounds",
            "1",
            "--interval-ms",
            "0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["watch"]["rounds"], 1);
    assert_eq!(json["watch"]["stable"], false);
}

#[test]
fn test_dv_strategy_from_config() {
    let graph = GraphDir::new(TRIANGLE);
    std::fs::create_dir_all(graph.config_dir()).unwrap();
    std::fs::write(
        graph.config_dir().join("config.toml"),
        "[distance_vector]\nstrategy = \"batch\"\n",
    )
    .unwrap();

    graph
        .cmd()
        .args(["--format", "records", "dv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy=batch"));
}

#[test]
fn test_dv_unknown_strategy() {
    let graph = GraphDir::new(TRIANGLE);
    graph
        .cmd()
        .args(["dv", "--strategy", "flood"])
        .assert()
        .code(2);
}
