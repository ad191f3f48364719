// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export command arguments.
//!
//! ```text
//! export -o users -t users -f id,name,email
//!   → users.csv (extension appended when missing)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `export` command.
///
/// All three of `--out`, `--table` and `--fields` must be supplied for the
/// export to proceed; the handler reports whichever is missing.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Output filename/path. A `.csv` extension is appended when the path
    /// has none.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Table name.
    #[arg(short = 't', long = "table", value_name = "TABLE")]
    pub table: Option<String>,

    /// Comma-separated list of table fields to export.
    #[arg(short = 'f', long = "fields", value_name = "FIELDS")]
    pub fields: Option<String>,
}

impl ExportArgs {
    /// Splits the `--fields` value into individual field names.
    ///
    /// Surrounding whitespace per field is trimmed; empty entries are
    /// dropped.
    #[must_use]
    pub fn field_list(&self) -> Vec<String> {
        self.fields
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }
}
