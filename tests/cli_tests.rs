#![cfg(feature = "cli")]

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const JANE: &str = "INSERT INTO contacts (name, phone) VALUES ('Jane Doe', '555-1234');";

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_contacts-csv"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_binary_converts_input_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("contacts_insert_final.sql"),
        format!("{}\n", JANE),
    )
    .unwrap();

    let output = run_cli(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "Reading SQL data from contacts_insert_final.sql...\n\
         Found 1 contacts\n\
         Successfully created contacts.csv with 1 contacts\n\
         \n\
         First 5 contacts:\n\
         1. Jane Doe - 555-1234\n"
    );

    let csv = std::fs::read(temp_dir.path().join("contacts.csv")).unwrap();
    assert_eq!(csv, b"name,phone\r\nJane Doe,555-1234\r\n".to_vec());
}

#[test]
fn test_binary_reports_missing_input_and_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "Error: contacts_insert_final.sql not found!\n"
    );
    assert!(!temp_dir.path().join("contacts.csv").exists());
}

#[test]
fn test_binary_rejects_same_input_and_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("data.sql"), JANE).unwrap();

    let output = run_cli(temp_dir.path(), &["-i", "data.sql", "-o", "data.sql"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "");
    assert!(!output.stderr.is_empty());
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("data.sql")).unwrap(),
        JANE
    );
}

#[test]
fn test_binary_dry_run_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("contacts_insert_final.sql"), JANE).unwrap();

    let output = run_cli(temp_dir.path(), &["--dry-run"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Dry run: contacts.csv was not written\n"));
    assert!(!temp_dir.path().join("contacts.csv").exists());
}

#[test]
fn test_binary_lf_flag() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("contacts_insert_final.sql"), JANE).unwrap();

    let output = run_cli(temp_dir.path(), &["--lf"]);

    assert_eq!(output.status.code(), Some(0));
    let csv = std::fs::read(temp_dir.path().join("contacts.csv")).unwrap();
    assert_eq!(csv, b"name,phone\nJane Doe,555-1234\n".to_vec());
}
