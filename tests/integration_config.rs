// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for layered configuration loading.

use devkit_rs::config::Config;
use devkit_rs::logging::LogLevel;
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn config_defaults() {
    let config = Config::parse("").unwrap();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.tools.npx, "npx");
    assert_eq!(config.export.database_url_var, "DATABASE_URL");
    assert!(config.test.coverage_badges);
}

// =============================================================================
// File Loading
// =============================================================================

#[test]
fn config_single_file() {
    let file = toml_file(
        "[tools]\n\
         npx = \"/opt/node/bin/npx\"\n\n\
         [export]\n\
         env_file = \"deploy/.env\"\n",
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.tools.npx, "/opt/node/bin/npx");
    assert_eq!(config.export.env_file.to_str(), Some("deploy/.env"));
    // Untouched sections keep their defaults
    assert_eq!(config.export.database_url_var, "DATABASE_URL");
}

#[test]
fn config_later_file_overrides_earlier() {
    let base = toml_file("[tools]\nnpx = \"base-npx\"\n");
    let overlay = toml_file("[tools]\nnpx = \"overlay-npx\"\n");

    let config = Config::builder()
        .add_toml_file(base.path())
        .add_toml_file(overlay.path())
        .build()
        .unwrap();
    assert_eq!(config.tools.npx, "overlay-npx");
}

#[test]
fn config_missing_required_file_fails() {
    let result = Config::from_file("/nonexistent/devkit-test/devkit.toml");
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file_is_fine() {
    let config = Config::builder()
        .add_toml_file_optional("/nonexistent/devkit-test/devkit.toml")
        .build()
        .unwrap();
    assert_eq!(config.tools.npx, "npx");
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn config_set_override_beats_file() {
    let file = toml_file("[global]\ndry = false\n");

    let config = Config::builder()
        .add_toml_file(file.path())
        .set("global.dry", "true")
        .unwrap()
        .set("test.coverage_badges", "false")
        .unwrap()
        .build()
        .unwrap();
    assert!(config.global.dry);
    assert!(!config.test.coverage_badges);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn config_rejects_unknown_section_key() {
    let result = Config::parse("[tools]\nnode = \"node\"\n");
    assert!(result.is_err());
}

#[test]
fn config_rejects_out_of_range_log_level() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn config_rejects_empty_npx() {
    let result = Config::parse("[tools]\nnpx = \"\"\n");
    assert!(result.is_err());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn config_format_options_lists_every_section() {
    let config = Config::parse("").unwrap();
    let lines = config.format_options();

    for prefix in ["global.", "tools.", "test.", "export."] {
        assert!(
            lines.iter().any(|l| l.starts_with(prefix)),
            "no {prefix} options listed"
        );
    }
    // Deterministic ordering
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}
