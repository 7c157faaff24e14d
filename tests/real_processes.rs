// tests/real_processes.rs

#![cfg(unix)]

use std::fs;

use clap::Parser;
use runlist::cli::CliArgs;
use runlist::errors::RunlistError;
use runlist_test_utils::builders::CommandListBuilder;
use runlist_test_utils::{init_tracing, with_timeout};
use tempfile::tempdir;

fn args(extra: &[&str], file: &std::path::Path) -> CliArgs {
    let mut argv = vec!["runlist"];
    argv.extend_from_slice(extra);
    argv.push(file.to_str().unwrap());
    CliArgs::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn pass_fail_and_launch_error() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = CommandListBuilder::new()
        .command("echo hi")
        .command("false")
        .command("/no/such/binary arg")
        .write_to(dir.path(), "cmds.txt");

    let summary = with_timeout(runlist::run(args(&["-c", "2"], &path)))
        .await
        .unwrap();

    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
    assert!(!summary.is_success());
}

#[tokio::test]
async fn comments_only_is_a_clean_run() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = CommandListBuilder::new()
        .comment("nothing to do")
        .blank()
        .write_to(dir.path(), "cmds.txt");

    let summary = with_timeout(runlist::run(args(&[], &path))).await.unwrap();

    assert_eq!(summary.total(), 0);
    assert!(summary.is_success());
}

#[tokio::test]
async fn without_rewrite_the_file_is_untouched() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = CommandListBuilder::new()
        .comment("keep me")
        .command("true")
        .command("echo a")
        .write_to(dir.path(), "cmds.txt");
    let before = fs::read(&path).unwrap();

    for _ in 0..2 {
        with_timeout(runlist::run(args(&[], &path))).await.unwrap();
    }

    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(!dir.path().join("cmds.txt.old").exists());
}

#[tokio::test]
async fn rewrite_orders_by_elapsed_and_keeps_backup() {
    init_tracing();
    let dir = tempdir().unwrap();
    let list = CommandListBuilder::new()
        .command("sleep 0.6")
        .command("sleep 0.1")
        .command("sleep 0.3");
    let path = list.write_to(dir.path(), "cmds.txt");

    let summary = with_timeout(runlist::run(args(&["-w"], &path)))
        .await
        .unwrap();
    assert!(summary.is_success());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "sleep 0.6\nsleep 0.3\nsleep 0.1\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("cmds.txt.old")).unwrap(),
        list.text()
    );
}

#[tokio::test]
async fn missing_command_file_is_fatal() {
    init_tracing();
    let dir = tempdir().unwrap();

    let result = runlist::run(args(&[], &dir.path().join("absent.txt"))).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn unparsable_line_is_fatal() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = CommandListBuilder::new()
        .command("true")
        .command(" leading-space")
        .write_to(dir.path(), "cmds.txt");

    match runlist::run(args(&[], &path)).await {
        Err(RunlistError::ParseError { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[tokio::test]
async fn config_file_values_are_validated() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = CommandListBuilder::new()
        .command("true")
        .write_to(dir.path(), "cmds.txt");
    let cfg = dir.path().join("runlist.toml");
    fs::write(&cfg, "[run]\nconcurrency = 0\n").unwrap();

    let result = runlist::run(args(&["--config", cfg.to_str().unwrap()], &path)).await;

    assert!(matches!(result, Err(RunlistError::ConfigError(_))));
}

#[tokio::test]
async fn dry_run_executes_nothing() {
    init_tracing();
    let dir = tempdir().unwrap();
    let marker = dir.path().join("touched");
    let path = CommandListBuilder::new()
        .command(&format!("touch {}", marker.display()))
        .write_to(dir.path(), "cmds.txt");

    let summary = runlist::run(args(&["--dry-run"], &path)).await.unwrap();

    assert_eq!(summary.total(), 0);
    assert!(!marker.exists());
}

#[tokio::test]
async fn failed_rewrite_keeps_run_status_and_original_file() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = CommandListBuilder::new()
        .command("true")
        .command("echo ok")
        .write_to(dir.path(), "cmds.txt");
    let before = fs::read(&path).unwrap();

    // A directory sitting at the backup path makes both the stale-backup
    // removal and the rename fail, even for root.
    let backup = dir.path().join("cmds.txt.old");
    fs::create_dir(&backup).unwrap();
    fs::write(backup.join("keep"), b"x").unwrap();

    let summary = with_timeout(runlist::run(args(&["-w"], &path)))
        .await
        .unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.passed, 2);
    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(backup.is_dir(), "backup path must not be replaced by a file");
}

#[test]
fn banner_is_not_printed_for_help() {
    let out = std::process::Command::new(env!("CARGO_BIN_EXE_runlist"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stdout).contains("runlist version:"));
}

#[test]
fn launch_error_is_reported_once_at_default_log_level() {
    let dir = tempdir().unwrap();
    let path = CommandListBuilder::new()
        .command("/no/such/binary arg")
        .write_to(dir.path(), "cmds.txt");

    let out = std::process::Command::new(env!("CARGO_BIN_EXE_runlist"))
        .arg(&path)
        .env_remove("RUNLIST_LOG")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.starts_with("runlist version:"));
    assert!(stdout.contains("FAIL : /no/such/binary arg"));
    assert!(!stderr.contains("failed to start process"), "stderr: {stderr}");
}
