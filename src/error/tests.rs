// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, DevkitError, DevkitResult, DbError, ExportError, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "export".to_string(),
        key: "env_file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "missing required config key 'env_file' in section '[export]'"
    );
}

#[test]
fn test_db_error_display() {
    let err = DbError::MissingComponent { component: "host" };
    assert_eq!(err.to_string(), "database url is missing its host");
}

#[test]
fn test_export_error_display() {
    let err = ExportError::MissingArgument("--table");
    assert_eq!(err.to_string(), "missing required argument: --table");
}

#[test]
fn test_bail_out_display() {
    let err = bail_out("something broke");
    assert_eq!(err.to_string(), "fatal error: something broke");
}

#[test]
fn test_devkit_error_size() {
    // DevkitError should be reasonably small
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<DevkitError>();
    assert!(size <= 24, "DevkitError is {size} bytes, expected <= 24");
}

#[test]
fn test_devkit_result_size() {
    let size = std::mem::size_of::<DevkitResult<()>>();
    assert!(size <= 24, "DevkitResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_boxed_from_conversions() {
    let err: DevkitError = ExportError::MissingArgument("--out").into();
    assert!(matches!(err, DevkitError::Export(_)));

    let err: DevkitError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, DevkitError::Io(_)));
}
