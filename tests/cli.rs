use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;

fn cowsay() -> Command {
    cargo_bin_cmd!("cowsay")
}

fn args_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_words_are_joined_and_rendered() {
    let expected = [
        " ____________________",
        "< The Cow says Mhoow >",
        " --------------------",
        r"         \   ^__^",
        r"          \  (oo)\_______",
        r"             (__)\       )\/\",
        r"                 ||----w |",
        r"                 ||     ||",
        "",
    ]
    .join("\n");
    cowsay()
        .args(["The", "Cow", "says", "Mhoow"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_reads_stdin_when_no_words_given() {
    cowsay()
        .write_stdin("first line\n\n   second   \n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            " ____________\n /          \\\n< first line >\n< second     >\n \\          /\n ------------\n",
        ));
}

#[test]
fn test_blank_input_fails() {
    cowsay()
        .write_stdin("   \n  \n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: input text must contain non-whitespace content",
        ));
}

#[test]
fn test_module_mode_success() {
    let file = args_file(r#"{"ANSIBLE_MODULE_ARGS": {"text": "moo"}}"#);
    let output = cowsay().arg("--args").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["changed"], Value::Bool(false));
    assert_eq!(result["message"][0], " _____");
    assert_eq!(result["message"][1], "< moo >");
    assert_eq!(result["message"].as_array().unwrap().len(), 3 + 5);
}

#[test]
fn test_module_mode_check_flag_adds_warning() {
    let file = args_file(r#"{"text": "moo"}"#);
    let output = cowsay()
        .arg("--check")
        .arg("--args")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        result["warnings"][0],
        "Module 'cowsay' is running in 'check' mode"
    );
    assert_eq!(result["message"][1], "< moo >");
}

#[test]
fn test_module_mode_reports_failure_as_json() {
    let file = args_file(r#"{"text": "  \t "}"#);
    let output = cowsay().arg("--args").arg(file.path()).output().unwrap();
    assert!(!output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["failed"], Value::Bool(true));
    assert_eq!(result["msg"], "input text must contain non-whitespace content");
}

#[test]
fn test_module_mode_rejects_malformed_args() {
    let file = args_file(r#"{"txt": "moo"}"#);
    let output = cowsay().arg("--args").arg(file.path()).output().unwrap();
    assert!(!output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["failed"], Value::Bool(true));
    let msg = result["msg"].as_str().unwrap();
    assert!(msg.starts_with("Invalid module arguments"), "{msg}");
    assert!(msg.contains("missing field `text`"), "{msg}");
}

#[test]
fn test_args_conflicts_with_positional_text() {
    let file = args_file(r#"{"text": "moo"}"#);
    cowsay()
        .arg("--args")
        .arg(file.path())
        .arg("moo")
        .assert()
        .failure();
}
