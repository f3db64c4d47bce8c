//! End-to-end tests for the `modlog` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const CONFIG: &str = r#"
[subscriber]
filter = "info"
ansi = false

[loggers.svc]
level = "info"
prefix = "[svc] "

[loggers.db]
level = "nolog"
"#;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("modlog.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn modlog(args: &[&str], config: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modlog"));
    cmd.arg(args[0]).arg(config).args(&args[1..]);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("failed to run modlog")
}

#[test]
fn test_emit_fatal_exits_255() {
    let (_dir, path) = write_config(CONFIG);
    let output = modlog(&["emit", "svc", "fatal", "boom"], &path);

    assert_eq!(output.status.code(), Some(255));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[svc] boom"), "stdout: {}", stdout);
}

#[test]
fn test_emit_fatal_ignores_disabled_threshold() {
    let (_dir, path) = write_config(CONFIG);
    let output = modlog(&["emit", "db", "fatal", "down"], &path);

    assert_eq!(output.status.code(), Some(255));
}

#[test]
fn test_emit_respects_threshold() {
    let (_dir, path) = write_config(CONFIG);

    let shown = modlog(&["emit", "svc", "info", "hello"], &path);
    assert!(shown.status.success());
    assert!(String::from_utf8_lossy(&shown.stdout).contains("[svc] hello"));

    let hidden = modlog(&["emit", "svc", "debug", "hidden"], &path);
    assert!(hidden.status.success());
    assert!(!String::from_utf8_lossy(&hidden.stdout).contains("hidden"));
}

#[test]
fn test_emit_template() {
    let (_dir, path) = write_config(CONFIG);
    let output = modlog(&["emit", "svc", "warn", "--template", "took %.2f ms", "3.14159"], &path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[svc] took 3.14 ms"), "stdout: {}", stdout);
}

#[test]
fn test_show_prints_snapshot() {
    let (_dir, path) = write_config(CONFIG);
    let output = modlog(&["show"], &path);

    assert!(output.status.success());
    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["svc"]["prefix"], "[svc] ");
    assert_eq!(snapshot["svc"]["threshold"], "INFO");
    assert_eq!(snapshot["db"]["prefix"], "[db] ");
    assert_eq!(snapshot["db"]["threshold"], "NOLOG");
}

#[test]
fn test_check_lists_loggers() {
    let (_dir, path) = write_config(CONFIG);
    let output = modlog(&["check"], &path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("svc\tINFO\t\"[svc] \""), "stdout: {}", stdout);
    assert!(stdout.contains("db\tNOLOG\t\"[db] \""), "stdout: {}", stdout);
}

#[test]
fn test_check_rejects_unknown_level() {
    let (_dir, path) = write_config("[loggers.svc]\nlevel = \"chatty\"\n");
    let output = modlog(&["check"], &path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("chatty"), "stderr: {}", stderr);
}
