// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ensure_csv_extension, quote_ident, write_csv};
use crate::error::ExportError;
use std::path::Path;

#[test]
fn test_quote_ident() {
    assert_eq!(quote_ident("users"), "\"users\"");
    assert_eq!(quote_ident("weird\"name"), "\"weird\"\"name\"");
}

#[test]
fn test_ensure_csv_extension_appended() {
    assert_eq!(
        ensure_csv_extension(Path::new("out/users")),
        Path::new("out/users.csv")
    );
}

#[test]
fn test_ensure_csv_extension_preserved() {
    // Any existing extension is left alone, matching the original tool
    assert_eq!(
        ensure_csv_extension(Path::new("users.csv")),
        Path::new("users.csv")
    );
    assert_eq!(
        ensure_csv_extension(Path::new("users.txt")),
        Path::new("users.txt")
    );
}

#[test]
fn test_write_csv_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");

    let columns = vec!["id".to_string(), "name".to_string(), "email".to_string()];
    let rows = vec![
        vec!["1".to_string(), "alice".to_string(), "a@example.com".to_string()],
        vec!["2".to_string(), "bob".to_string(), String::new()],
    ];

    write_csv(&path, "users", &columns, &rows).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "id,name,email\n1,alice,a@example.com\n2,bob,\n");
}

#[test]
fn test_write_csv_subset_rows_shorter_than_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subset.csv");

    // Header lists the full table schema; records carry only exported fields
    let columns = vec!["id".to_string(), "name".to_string(), "email".to_string()];
    let rows = vec![vec!["1".to_string(), "alice".to_string()]];

    write_csv(&path, "users", &columns, &rows).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "id,name,email\n1,alice\n");
}

#[test]
fn test_write_csv_no_columns_is_empty_table_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("none.csv");

    let err = write_csv(&path, "missing_table", &[], &[]).unwrap_err();
    assert!(matches!(err, ExportError::EmptyTable(t) if t == "missing_table"));
}

#[test]
fn test_write_csv_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quoted.csv");

    let columns = vec!["id".to_string(), "comment".to_string()];
    let rows = vec![vec!["1".to_string(), "hello, \"world\"".to_string()]];

    write_csv(&path, "posts", &columns, &rows).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "id,comment\n1,\"hello, \"\"world\"\"\"\n");
}
