use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::tempdir;

fn eqn(args: &[&Path]) -> Output {
    let cli_path = PathBuf::from(env!("CARGO_BIN_EXE_eqn"));
    Command::new(cli_path)
        .args(args)
        .output()
        .expect("failed to run eqn")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Write `input`, run on it, and return the process output plus the written
/// result, if any.
fn run_on(input: &str) -> (Output, Option<String>) {
    let workspace = tempdir().expect("create temp dir");
    let input_path = workspace.path().join("input.txt");
    let output_path = workspace.path().join("output.txt");
    fs::write(&input_path, input).expect("write input");
    let output = eqn(&[&input_path, &output_path]);
    let result = fs::read_to_string(&output_path).ok();
    (output, result)
}

#[test]
fn resolves_forward_references() {
    let (output, result) = run_on("c = b + a\nb = a + 2\na = 1\n");
    assert!(output.status.success(), "{}", stdout(&output));
    assert_eq!(result.as_deref(), Some("a = 1\nb = 3\nc = 4\n"));
}

#[test]
fn sums_literals() {
    let (output, result) = run_on("z = 5 + 5");
    assert!(output.status.success());
    assert_eq!(result.as_deref(), Some("z = 10\n"));
}

#[test]
fn empty_rhs_is_zero() {
    let (output, result) = run_on("e =\n");
    assert!(output.status.success());
    assert_eq!(result.as_deref(), Some("e = 0\n"));
}

#[test]
fn output_is_stable_across_runs() {
    let input = "total = a + b + c\nc = 3\nb = a + 1\na = 4 + 4\n";
    let (_, first) = run_on(input);
    let (_, second) = run_on(input);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn cycle_fails_without_output() {
    let (output, result) = run_on("x = y\ny = x\n");
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Fail reason: cyclic dependency: x -> y -> x\n"
    );
    assert_eq!(result, None);
}

#[test]
fn undefined_reference_fails_without_output() {
    let (output, result) = run_on("a = 1\nb = a + c\n");
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Fail reason: undefined variable `c` referenced by `b`\n"
    );
    assert_eq!(result, None);
}

#[test]
fn malformed_line_fails_without_output() {
    let (output, result) = run_on("a = 1\nb 2\n");
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Fail reason: malformed line 2: missing `=`\n"
    );
    assert_eq!(result, None);
}

#[test]
fn missing_input_file() {
    let workspace = tempdir().expect("create temp dir");
    let input_path = workspace.path().join("absent.txt");
    let output_path = workspace.path().join("output.txt");
    let output = eqn(&[&input_path, &output_path]);
    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("Fail reason: cannot read "));
    assert!(!output_path.exists());
}

#[test]
fn one_argument_is_a_usage_error() {
    let workspace = tempdir().expect("create temp dir");
    let input_path = workspace.path().join("input.txt");
    fs::write(&input_path, "a = 1\n").expect("write input");
    let output = eqn(&[&input_path]);
    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("Fail reason: incorrect usage"));
}

#[test]
fn three_arguments_is_a_usage_error() {
    let workspace = tempdir().expect("create temp dir");
    let input_path = workspace.path().join("input.txt");
    let output_path = workspace.path().join("output.txt");
    let extra_path = workspace.path().join("extra.txt");
    fs::write(&input_path, "a = 1\n").expect("write input");
    let output = eqn(&[&input_path, &output_path, &extra_path]);
    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("Fail reason: incorrect usage"));
    assert!(!output_path.exists());
    assert!(!extra_path.exists());
}
