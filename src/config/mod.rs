// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for devkit-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. devkit.toml (cwd, optional)
//! 3. --config FILE
//! 4. DEVKIT_* env vars
//! 5. --set key=value CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! Section and key are joined with a double underscore, so keys that
//! themselves contain underscores survive the split:
//!
//! ```text
//! DEVKIT_GLOBAL__DRY=true           → global.dry = true
//! DEVKIT_TOOLS__NPX=/usr/bin/npx    → tools.npx = "/usr/bin/npx"
//! DEVKIT_EXPORT__ENV_FILE=dev.env   → export.env_file = "dev.env"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{ExportConfig, GlobalConfig, TestConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Test-runner options.
    pub test: TestConfig,
    /// Table-export options.
    pub export: ExportConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use devkit_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("devkit.toml")
    ///     .with_env_prefix("DEVKIT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a required value is empty.
    pub fn validate(&self) -> Result<()> {
        if self.tools.npx.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "tools".to_string(),
                key: "npx".to_string(),
            }
            .into());
        }
        if self.export.database_url_var.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "export".to_string(),
                key: "database_url_var".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_test_options(&mut options);
        self.format_export_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.npx".into(), self.tools.npx.clone());
    }

    fn format_test_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "test.ui_script".into(),
            self.test.ui_script.display().to_string(),
        );
        options.insert(
            "test.emulation_script".into(),
            self.test.emulation_script.display().to_string(),
        );
        options.insert(
            "test.coverage_badges".into(),
            self.test.coverage_badges.to_string(),
        );
    }

    fn format_export_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "export.env_file".into(),
            self.export.env_file.display().to_string(),
        );
        options.insert(
            "export.database_url_var".into(),
            self.export.database_url_var.clone(),
        );
    }
}
