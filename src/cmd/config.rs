// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration introspection commands.

use crate::config::Config;

/// Prints all effective configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the list of loaded configuration files.
pub fn run_inis_command(files: &[String]) {
    if files.is_empty() {
        println!("no config files loaded (using defaults)");
        return;
    }
    for file in files {
        println!("{file}");
    }
}
