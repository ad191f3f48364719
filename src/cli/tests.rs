// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["devkit", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_test_flags() {
    let cli = Cli::try_parse_from(["devkit", "test", "-b", "-e"]).unwrap();
    let Some(Command::Test(args)) = cli.command else {
        panic!("expected test command");
    };
    assert!(args.backend);
    assert!(args.emulation);
    assert!(args.test.is_none());
}

#[test]
fn test_parse_named_test() {
    let cli = Cli::try_parse_from(["devkit", "test", "--test", "userStatusChange"]).unwrap();
    let Some(Command::Test(args)) = cli.command else {
        panic!("expected test command");
    };
    assert_eq!(args.test.as_deref(), Some("userStatusChange"));
    assert!(!args.is_empty());
}

#[test]
fn test_parse_test_no_flags_is_empty() {
    let cli = Cli::try_parse_from(["devkit", "test"]).unwrap();
    let Some(Command::Test(args)) = cli.command else {
        panic!("expected test command");
    };
    assert!(args.is_empty());
}

#[test]
fn test_parse_backend_and_named_test_accepted() {
    // The combination is legal; precedence is resolved by the handler
    let cli = Cli::try_parse_from(["devkit", "test", "-b", "-t", "rating"]).unwrap();
    let Some(Command::Test(args)) = cli.command else {
        panic!("expected test command");
    };
    assert!(args.backend);
    assert_eq!(args.test.as_deref(), Some("rating"));
}

#[test]
fn test_parse_export_args() {
    let cli = Cli::try_parse_from([
        "devkit", "export", "-o", "users", "-t", "users", "-f", "id,name,email",
    ])
    .unwrap();
    let Some(Command::Export(args)) = cli.command else {
        panic!("expected export command");
    };
    assert_eq!(args.out, Some(PathBuf::from("users")));
    assert_eq!(args.table.as_deref(), Some("users"));
    assert_eq!(args.field_list(), vec!["id", "name", "email"]);
}

#[test]
fn test_export_field_list_trims_and_drops_empties() {
    let cli =
        Cli::try_parse_from(["devkit", "export", "-f", " id , name ,,email, "]).unwrap();
    let Some(Command::Export(args)) = cli.command else {
        panic!("expected export command");
    };
    assert_eq!(args.field_list(), vec!["id", "name", "email"]);
}

#[test]
fn test_global_options_to_overrides() {
    let cli = Cli::try_parse_from([
        "devkit",
        "--dry",
        "-l",
        "4",
        "--set",
        "tools.npx=/opt/node/bin/npx",
        "test",
        "-b",
    ])
    .unwrap();

    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"tools.npx=/opt/node/bin/npx".to_string()));
    assert!(overrides.contains(&"global.output_log_level=4".to_string()));
    // file level falls back to the console level
    assert!(overrides.contains(&"global.file_log_level=4".to_string()));
    assert!(overrides.contains(&"global.dry=true".to_string()));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    let result = Cli::try_parse_from(["devkit", "-l", "7", "test"]);
    assert!(result.is_err());
}

#[test]
fn test_config_flag_repeats() {
    let cli = Cli::try_parse_from([
        "devkit", "-c", "a.toml", "--config", "b.toml", "options",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
}
