// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for devkit-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! devkit [global options] <command>
//! test [-b] [-t testname] [-e]
//! export -o FILE -t TABLE -f FIELDS
//! options
//! inis
//! version
//! ```

pub mod export;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::export::ExportArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::test::TestArgs;
use clap::{Parser, Subcommand};

/// Developer Workflow Utilities
///
/// Small utilities supporting the project's development workflow.
#[derive(Debug, Parser)]
#[command(
    name = "devkit",
    author,
    version,
    about = "Developer workflow utilities",
    long_about = "devkit-rs Copyright (C) 2026 devkit-rs Contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Small utilities supporting the project's development workflow:\n\
                  a test-runner wrapper around the JavaScript test framework and\n\
                  a database-table-to-CSV exporter. Both load configuration from\n\
                  a dotenv-style file. See `devkit <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, devkit will look for an optional `devkit.toml` in\n\
                  the current directory. Additional TOML files can be specified\n\
                  with --config; those are loaded after the default and override\n\
                  it. DEVKIT_* environment variables and --set overrides are\n\
                  applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by devkit.
    Inis,

    /// Runs the project's test suites.
    Test(TestArgs),

    /// Exports a database table to CSV.
    Export(ExportArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
