//! End-to-end tests for the `genruntime_vars` binary.
//!
//! Each test runs the built binary in its own temporary directory. Tests that
//! need a real git repository return early when git is not installed.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_genruntime_vars");
const OUTPUT_FILE: &str = "runtime_vars.go";
const USAGE: &str = "Usage: genruntime_vars\n\nThis program does not plan on having a functional command line interface (CLI).\n\n";

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

fn isolated_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn init_repo(dir: &Path) {
    let status = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(dir)
        .status()
        .expect("run git init");
    assert!(status.success(), "git init failed");
}

fn run(dir: &Path, args: &[&str], prog_data_dir: Option<&str>) -> Output {
    run_in(dir, dir, args, prog_data_dir)
}

/// Run the binary from `cwd`, stopping git's repository search at the
/// parent of `root` so nothing outside the temp dir is discovered.
fn run_in(root: &Path, cwd: &Path, args: &[&str], prog_data_dir: Option<&str>) -> Output {
    command(root, cwd, args, prog_data_dir)
        .output()
        .expect("run genruntime_vars")
}

/// Like [`run`], but with `RUST_LOG` unset so the default filter applies.
fn run_default_logging(dir: &Path, args: &[&str], prog_data_dir: Option<&str>) -> Output {
    command(dir, dir, args, prog_data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run genruntime_vars")
}

fn command(root: &Path, cwd: &Path, args: &[&str], prog_data_dir: Option<&str>) -> Command {
    let ceiling = root.parent().unwrap_or(root);
    let mut cmd = Command::new(BIN);
    cmd.args(args)
        .current_dir(cwd)
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env_remove("PROG_DATA_DIR")
        .env("RUST_LOG", "off");
    if let Some(value) = prog_data_dir {
        cmd.env("PROG_DATA_DIR", value);
    }
    cmd
}

#[test]
fn help_prints_usage_and_succeeds() {
    for flag in ["--help", "-h"] {
        let dir = isolated_dir();
        let output = run(dir.path(), &[flag], None);

        assert_eq!(output.status.code(), Some(0), "flag {flag}");
        assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
        assert!(!dir.path().join(OUTPUT_FILE).exists());
    }
}

#[test]
fn unknown_argument_prints_usage_and_fails() {
    let dir = isolated_dir();
    let output = run(dir.path(), &["generate"], None);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn help_with_extra_arguments_fails() {
    let dir = isolated_dir();
    let output = run(dir.path(), &["--help", "extra"], None);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
}

#[test]
fn arguments_never_trigger_generation_in_a_repo() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = isolated_dir();
    init_repo(dir.path());

    let output = run(dir.path(), &["--version"], Some("/custom/path"));

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn generates_file_at_repo_root() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = isolated_dir();
    init_repo(dir.path());
    let nested = dir.path().join("cmd").join("tool");
    fs::create_dir_all(&nested).unwrap();

    let output = run_in(dir.path(), &nested, &[], Some("/custom/path"));

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    assert!(!nested.join(OUTPUT_FILE).exists());

    let written = dir.path().join(OUTPUT_FILE);
    let body = fs::read_to_string(&written).unwrap();
    assert!(body.starts_with("// Code generated by go generate; DO NOT EDIT.\n"));
    assert!(body.contains("\npackage main\n"));
    assert!(body.contains("progDataDir = \"/custom/path\""));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&written).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}

#[test]
fn unset_or_empty_env_uses_default_dir() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    for value in [None, Some("")] {
        let dir = isolated_dir();
        init_repo(dir.path());

        let output = run(dir.path(), &[], value);

        assert_eq!(output.status.code(), Some(0));
        let body = fs::read_to_string(dir.path().join(OUTPUT_FILE)).unwrap();
        assert!(body.contains("progDataDir = \"/usr/local/share/debcomprt\""));
    }
}

#[test]
fn second_run_is_byte_identical() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = isolated_dir();
    init_repo(dir.path());
    let written = dir.path().join(OUTPUT_FILE);

    assert_eq!(run(dir.path(), &[], Some("/data")).status.code(), Some(0));
    let first = fs::read(&written).unwrap();
    assert_eq!(run(dir.path(), &[], Some("/data")).status.code(), Some(0));
    let second = fs::read(&written).unwrap();

    assert_eq!(first, second);
}

#[test]
fn outside_repository_aborts_without_output() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = isolated_dir();

    let output = run(dir.path(), &[], Some("/custom/path"));

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join(OUTPUT_FILE).exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("genruntime_vars:"));
}

#[test]
fn unknown_argument_reports_usage_error_once() {
    let dir = isolated_dir();
    let output = run_default_logging(dir.path(), &["generate"], None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, "genruntime_vars: Invalid arguments: generate\n");
}

#[test]
fn successful_run_is_silent_by_default() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = isolated_dir();
    init_repo(dir.path());

    let output = run_default_logging(dir.path(), &[], Some("/custom/path"));

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn fatal_error_is_reported_once_without_colour() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }
    let dir = isolated_dir();

    let output = run_default_logging(dir.path(), &[], None);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Cannot locate repository root").count(), 1);
    assert!(!stderr.contains('\u{1b}'), "stderr has escape codes: {stderr:?}");
}
