use crate::cli::support::{netlab, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_and_init() {
    let dir = tempdir().unwrap();
    let expected = dir.path().join("config.toml");

    netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));

    netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(expected.exists());

    netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_defaults() {
    let dir = tempdir().unwrap();
    netlab()
        .env("NETLAB_CONFIG_DIR", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id_scheme = \"numeric\""))
        .stdout(predicate::str::contains("[distance_vector]"))
        .stdout(predicate::str::contains("strategy = \"queue\""));
}

#[test]
fn test_config_show_explicit_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "id_scheme = \"alphabetic\"\n[layout]\nwidth = 800.0\n").unwrap();

    let output = netlab()
        .arg("--config")
        .arg(&path)
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["id_scheme"], "alphabetic");
    assert_eq!(json["layout"]["width"].as_f64(), Some(800.0));
    assert_eq!(json["distance_vector"]["max_rounds"], 64);
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();
    netlab()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["config", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}
