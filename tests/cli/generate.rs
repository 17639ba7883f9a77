use crate::cli::support::{netlab, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_generate_alphabetic_circle() {
    let dir = tempdir().unwrap();
    let output = netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["generate", "--nodes", "4", "--scheme", "alphabetic"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let nodes = json["nodes"].as_array().unwrap();
    let ids: Vec<&str> = nodes.iter().map(|n| n["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["A", "B", "C", "D"]);
    assert!(json["edges"].as_array().unwrap().is_empty());

    // 600x400 canvas, radius 0.7 of the smaller half-extent
    assert_eq!(nodes[0]["x"].as_f64(), Some(440.0));
    assert_eq!(nodes[0]["y"].as_f64(), Some(200.0));
}

#[test]
fn test_generate_numeric_default() {
    let dir = tempdir().unwrap();
    netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["--format", "records", "generate", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=generate scheme=numeric nodes=3"))
        .stdout(predicate::str::contains("N 0 x=440.000 y=200.000"))
        .stdout(predicate::str::contains("N 2 "));
}

#[test]
fn test_generate_output_loads_as_graph() {
    let dir = tempdir().unwrap();
    let output = netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["generate", "--nodes", "3", "--scheme", "alphabetic"])
        .output()
        .unwrap();
    let path = dir.path().join("generated.json");
    std::fs::write(&path, &output.stdout).unwrap();

    netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .arg("--graph")
        .arg(&path)
        .args(["dv", "--node", "A"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"B\s+∞\s+-").unwrap());
}

#[test]
fn test_generate_rejects_out_of_range_counts() {
    let dir = tempdir().unwrap();
    for args in [
        ["generate", "--nodes", "1", "--scheme", "numeric"],
        ["generate", "--nodes", "27", "--scheme", "alphabetic"],
        ["generate", "--nodes", "1001", "--scheme", "numeric"],
    ] {
        netlab()
            .env("NETLAB_CONFIG_DIR", dir.path())
            .args(args)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--nodes must be between"));
    }
}
