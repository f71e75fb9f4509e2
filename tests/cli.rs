use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const TEST_SCHEMA_PATH: &str = "tests/fixtures/beacon_config.json";
const EXPECTED_HEADER_PATH: &str = "tests/fixtures/expected_header.h";
const EXPECTED_TABLE_PATH: &str = "tests/fixtures/expected_table.csv";
const MISSING_FILE_MESSAGE: &str = "Error: The specified file does not exist.";

fn header_cmd() -> Command {
    Command::cargo_bin("schema-to-header").unwrap()
}

fn table_cmd() -> Command {
    Command::cargo_bin("schema-to-table").unwrap()
}

#[test]
fn header_to_stdout() {
    let expected = fs::read_to_string(EXPECTED_HEADER_PATH).unwrap();

    header_cmd()
        .arg(TEST_SCHEMA_PATH)
        .arg("scanner")
        .assert()
        .success()
        .stdout(expected)
        .stderr("");
}

#[test]
fn header_unknown_search_name_is_silent() {
    header_cmd()
        .arg(TEST_SCHEMA_PATH)
        .arg("does_not_exist")
        .assert()
        .success()
        .stdout(predicate::str::contains("struct").not())
        .stderr("");
}

#[test]
fn header_missing_file() {
    header_cmd()
        .arg("tests/fixtures/missing.json")
        .arg("scanner")
        .assert()
        .stdout("")
        .stderr(predicate::str::diff(format!("{}\n", MISSING_FILE_MESSAGE)));
}

#[test]
fn header_malformed_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let input = tempdir.path().join("broken.json");
    fs::write(&input, "{ \"properties\": ").unwrap();

    header_cmd()
        .arg(&input)
        .arg("scanner")
        .assert()
        .stdout("")
        .stderr(predicate::str::starts_with("Error parsing JSON: ").and(predicate::str::contains("line 1")));
}

#[test]
fn table_csv_to_stdout() {
    let expected = fs::read_to_string(EXPECTED_TABLE_PATH).unwrap();

    table_cmd()
        .arg(TEST_SCHEMA_PATH)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn table_tsv_to_stdout() {
    for flag in ["-t", "--tab"] {
        table_cmd()
            .arg(TEST_SCHEMA_PATH)
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Name\tType\tVersion\tDescription\n"))
            .stdout(predicate::str::contains(
                "scanner/rssi_filter/threshold\tnumber\t1.4.0\tMinimum RSSI    in dBm\n",
            ));
    }
}

#[test]
fn table_to_output_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let output = tempdir.path().join("fields.csv");
    fs::write(&output, "previous run\n").unwrap();

    table_cmd()
        .arg(TEST_SCHEMA_PATH)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(format!(
            "Conversion completed successfully! Output written to: {}\n",
            output.display()
        ));

    let expected = fs::read_to_string(EXPECTED_TABLE_PATH).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn table_missing_file_writes_nothing() {
    let tempdir = tempfile::tempdir().unwrap();
    let output = tempdir.path().join("fields.csv");

    table_cmd()
        .arg("tests/fixtures/missing.json")
        .arg("--output")
        .arg(&output)
        .assert()
        .stdout("")
        .stderr(predicate::str::diff(format!("{}\n", MISSING_FILE_MESSAGE)));

    assert!(!output.exists());
}
