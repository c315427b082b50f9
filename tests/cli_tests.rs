//! End-to-end tests for the pastegrid binary

#![cfg(feature = "cli")]

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Stdio};

struct Run {
    stdout: String,
    stderr: String,
    success: bool,
}

fn pastegrid(args: &[&str], stdin: &str) -> Run {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pastegrid"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    Run {
        stdout: String::from_utf8(output.stdout).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
        success: output.status.success(),
    }
}

const CLIPBOARD: &str = "5012345678900\t5099999999999\n3400930000001\n";
const EXPECTED: &str = r#"{"eans":[{"primary":"5012345678900","replacement":"5099999999999"}],"ignored3400":["3400930000001"]}"#;

#[test]
fn test_tsv_output_extracts_back() {
    let saved = pastegrid(&["paste", "--at", "G1", "--format", "tsv", "-q"], CLIPBOARD);
    assert!(saved.success, "{}", saved.stderr);
    assert!(saved.stdout.starts_with("A\tB\tC\tD\tE\tF\tCode barre\tCode EAN remplacement\n"));

    let extracted = pastegrid(&["extract"], &saved.stdout);
    assert!(extracted.success, "{}", extracted.stderr);
    assert_eq!(extracted.stdout.trim(), EXPECTED);
}

#[test]
fn test_csv_output_extracts_back() {
    let saved = pastegrid(&["paste", "--at", "G1", "--format", "csv", "-q"], CLIPBOARD);
    assert!(saved.success, "{}", saved.stderr);

    let extracted = pastegrid(&["extract", "--delimiter", "comma"], &saved.stdout);
    assert!(extracted.success, "{}", extracted.stderr);
    assert_eq!(extracted.stdout.trim(), EXPECTED);
}

#[test]
fn test_header_kept_on_request() {
    let saved = pastegrid(&["paste", "--at", "G1", "--format", "tsv", "-q"], CLIPBOARD);
    let extracted = pastegrid(&["extract", "--no-header"], &saved.stdout);
    assert!(extracted.success, "{}", extracted.stderr);
    assert!(extracted.stdout.contains(r#"{"primary":"Code barre","replacement":"Code EAN remplacement"}"#));
}

#[test]
fn test_unknown_delimiter_rejected() {
    let run = pastegrid(&["extract", "--delimiter", "pipe"], "a|b\n");
    assert!(!run.success);
    assert!(run.stderr.contains("unknown delimiter 'pipe'"));
}

#[test]
fn test_paste_outside_grid_has_nothing_to_extract() {
    let run = pastegrid(
        &["paste", "--row", "18446744073709551615", "--col", "6", "--extract", "--no-color"],
        "5012345678900\n",
    );
    assert!(!run.success);
    assert!(run.stderr.contains("outside the grid"));
    assert!(run.stderr.contains("no EAN code found"));
}

#[test]
fn test_empty_saved_grid_fails() {
    let run = pastegrid(&["extract"], "A\tB\tC\tD\tE\tF\tCode barre\n\t\t\t\t\t\t\n");
    assert!(!run.success);
    assert!(run.stderr.contains("no EAN code found"));
}
