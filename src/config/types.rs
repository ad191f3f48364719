// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for devkit-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ToolsConfig, TestConfig, ExportConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Print subprocess invocations without spawning them.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; empty disables file logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// External tool paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Node package runner used for every delegated tool invocation.
    pub npx: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            npx: "npx".to_string(),
        }
    }
}

/// Test-runner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestConfig {
    /// UI test script executed in emulation mode.
    pub ui_script: PathBuf,
    /// Mobile device emulation script executed in emulation mode.
    pub emulation_script: PathBuf,
    /// Generate coverage badges after a full backend run.
    pub coverage_badges: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            ui_script: PathBuf::from("test/ui/uitest.ts"),
            emulation_script: PathBuf::from("test/ui/mobile_emulation.ts"),
            coverage_badges: true,
        }
    }
}

/// Table-export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Dotenv file the connection string is read from.
    pub env_file: PathBuf,
    /// Name of the variable holding the connection string.
    pub database_url_var: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".env"),
            database_url_var: "DATABASE_URL".to_string(),
        }
    }
}
