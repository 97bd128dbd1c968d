//! # CLI Tests
//!
//! End-to-end binary tests for `tabgen generate`, `install`-adjacent file
//! output, and `check`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn tabgen() -> Command {
    Command::cargo_bin("tabgen").expect("binary should build")
}

fn write_manifest(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("tool.toml");
    fs::write(&path, content).expect("failed to write manifest");
    path
}

#[test]
fn test_generate_bash_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, common::SAMPLE_MANIFEST);

    tabgen()
        .args(["generate", "--shell", "bash"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("_tool() {")
                .and(predicate::str::contains("complete -F _tool tool")),
        );
}

#[test]
fn test_generate_fish_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, common::SAMPLE_MANIFEST);

    tabgen()
        .args(["generate", "--shell", "fish"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("function _tabgen_tool_using_command")
                .and(predicate::str::contains("-rfka 'debug release'")),
        );
}

#[test]
fn test_generate_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, common::SAMPLE_MANIFEST);
    let output = dir.path().join("tool.bash");

    tabgen()
        .args(["generate", "--shell", "bash", "--output"])
        .arg(&output)
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let script = fs::read_to_string(&output).expect("script file should exist");
    assert!(script.starts_with("#!/bin/bash"));
}

#[test]
fn test_check_valid_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, common::NESTED_MANIFEST);

    tabgen()
        .arg("check")
        .arg(&manifest)
        .assert()
        .success()
        .stderr(predicate::str::contains("is valid"));
}

#[test]
fn test_check_rejects_duplicate_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        &dir,
        "name = \"tool\"\n\n[[subcommands]]\nname = \"build\"\n\n[[subcommands]]\nname = \"build\"\n",
    );

    tabgen()
        .arg("check")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("error:")
                .and(predicate::str::contains("duplicate name or alias `build`")),
        );
}

#[test]
fn test_generate_missing_manifest_fails() {
    tabgen()
        .args(["generate", "--shell", "bash", "no-such-file.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read manifest"));
}
