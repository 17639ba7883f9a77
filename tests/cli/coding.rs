use crate::cli::support::{netlab, stdout_json};
use predicates::prelude::*;

#[test]
fn test_crc_textbook_frame() {
    netlab()
        .args(["crc", "1101011011", "10011"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRC:        1110"))
        .stdout(predicate::str::contains("Check:      ok"));
}

#[test]
fn test_crc_detects_flipped_bit() {
    let output = netlab()
        .args(["--format", "json", "crc", "1101011011", "10011", "--flip", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["crc"], "1110");
    assert_eq!(json["received"], "1111011011");
    assert_eq!(json["flipped"], 2);
    assert_eq!(json["valid"], false);
}

#[test]
fn test_crc_flip_out_of_range() {
    netlab()
        .args(["crc", "1101", "11", "--flip", "9"])
        .assert()
        .code(2);
}

#[test]
fn test_crc_rejects_non_binary() {
    netlab()
        .args(["crc", "1201", "11"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_hamming_encode() {
    netlab()
        .args(["--quiet", "hamming", "1011"])
        .assert()
        .success()
        .stdout("0110011\n");

    netlab()
        .args(["--format", "records", "hamming", "1011"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data=1011 parity=3 codeword=0110011"));
}

#[test]
fn test_hamming_correct_single_error() {
    let output = netlab()
        .args(["--format", "json", "hamming", "--correct", "0110111"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["error_position"], 5);
    assert_eq!(json["corrected"], "0110011");
    assert_eq!(json["data"], "1011");
}

#[test]
fn test_hamming_clean_codeword() {
    netlab()
        .args(["hamming", "--correct", "0110011"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error at:   none"))
        .stdout(predicate::str::contains("Data:       1011"));
}
