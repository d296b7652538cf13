// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn writes_and_reads_back_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.yaml");
    write_atomic(&path, "a: 1\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: 1\n");
}

#[test]
fn overwrites_an_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.yaml");
    write_atomic(&path, "a: 1\n").unwrap();
    write_atomic(&path, "a: 2\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: 2\n");
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/deeper/file.yaml");
    write_atomic(&path, "a: 1\n").unwrap();
    assert!(path.exists());
}

#[test]
fn leaves_no_tmp_file_behind_on_success() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.yaml");
    write_atomic(&path, "a: 1\n").unwrap();
    assert!(!path.with_extension("tmp").exists());
}
