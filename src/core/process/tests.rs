// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::ProcessError;

#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    assert_eq!(output.stdout().trim(), "hello");
}

#[tokio::test]
async fn test_process_exit_code_with_allow_failure() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 42"])
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
    assert!(!output.success());
}

#[tokio::test]
async fn test_process_nonzero_exit_is_error_by_default() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 1"])
        .quiet()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::NonZeroExit { code: 1, .. })
    ));
}

#[tokio::test]
async fn test_process_capture_large_output() {
    // Well past any pipe buffer; the capture path must keep draining while
    // the child is still running
    let output = ProcessBuilder::new("seq")
        .args(["1", "20000"])
        .capture_stdout()
        .run()
        .await
        .expect("seq should succeed");

    let lines: Vec<&str> = output.stdout().lines().collect();
    assert_eq!(lines.len(), 20000);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[19999], "20000");
}

#[tokio::test]
async fn test_process_cwd() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "found").unwrap();

    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "cat marker.txt"])
        .cwd(dir.path())
        .capture_stdout()
        .run()
        .await
        .expect("process should succeed");

    assert_eq!(output.stdout().trim(), "found");
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("/nonexistent/devkit-test/binary")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::SpawnFailed { .. })
    ));
}

#[test]
fn test_which_found_and_cached() {
    // cargo should always be available since we're running tests with cargo
    let builder = ProcessBuilder::which("cargo").expect("cargo should be found in PATH");
    assert!(builder.program().exists());

    // Second lookup comes from the cache and resolves identically
    let cached = ProcessBuilder::which("cargo").expect("cached lookup should succeed");
    assert_eq!(cached.program(), builder.program());
}

#[test]
fn test_which_not_found() {
    let err = ProcessBuilder::which("nonexistent_program_12345").unwrap_err();
    assert!(matches!(
        err,
        ProcessError::ExecutableNotFound { ref name } if name == "nonexistent_program_12345"
    ));
}
