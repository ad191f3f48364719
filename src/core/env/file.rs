// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv-style file parsing.
//!
//! ```text
//! "KEY=VALUE\n"          --> Pair { "KEY", "VALUE" }
//! "FOO=\n"               --> Pair { "FOO", "" }
//! "no delimiter here\n"  --> Skip
//! ```
//!
//! Keys and values are raw strings: no quoting, no comments, no multi-line
//! values, no unescaping. Each line is trimmed of surrounding whitespace
//! before the first `=` is located; nothing inside the key or value is
//! trimmed beyond that.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::EnvError;

use super::store::{EnvironmentStore, ProcessEnv};

/// The parse result for a single line of an environment file.
///
/// `Skip` is a deliberate, named outcome rather than an error: a line
/// without a `=` delimiter contributes nothing to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLine {
    /// A `KEY=VALUE` declaration, split at the first `=`.
    Pair { key: String, value: String },
    /// No `=` delimiter on the line; skipped silently by policy.
    Skip,
}

/// Parses a single line of an environment file.
#[must_use]
pub fn parse_line(line: &str) -> EnvLine {
    let line = line.trim();
    match line.find('=') {
        Some(idx) => EnvLine::Pair {
            key: line[..idx].to_string(),
            value: line[idx + 1..].to_string(),
        },
        None => EnvLine::Skip,
    }
}

/// Reads an environment file into a fresh mapping.
///
/// The ambient process environment is untouched. Duplicate keys resolve to
/// the last occurrence in the file. An empty file yields an empty mapping.
///
/// # Errors
///
/// Returns [`EnvError::ReadError`] if the file does not exist or cannot be
/// read. Malformed lines never cause failure.
pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>, EnvError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| EnvError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    let mut vars = BTreeMap::new();
    for line in content.lines() {
        match parse_line(line) {
            EnvLine::Pair { key, value } => {
                vars.insert(key, value);
            }
            EnvLine::Skip => {}
        }
    }

    Ok(vars)
}

/// Reads an environment file and merges it into the given store.
///
/// Installs exactly the mapping [`read_from_file`] would return for the same
/// input, overwriting any existing key of the same name.
///
/// # Errors
///
/// Returns [`EnvError::ReadError`] if the file does not exist or cannot be
/// read.
pub fn apply_to_store<P, S>(path: P, store: &mut S) -> Result<(), EnvError>
where
    P: AsRef<Path>,
    S: EnvironmentStore + ?Sized,
{
    let vars = read_from_file(path)?;
    store.merge(&vars);
    Ok(())
}

/// Reads an environment file into the ambient process environment.
///
/// Convenience form of [`apply_to_store`] targeting [`ProcessEnv`]. The side
/// effect on the process environment is the sole observable result. Pairs
/// whose key the OS rejects (for example the empty key parsed from `=bar`)
/// are skipped by [`ProcessEnv`] rather than aborting the process.
///
/// # Errors
///
/// Returns [`EnvError::ReadError`] if the file does not exist or cannot be
/// read.
pub fn apply_from_file<P: AsRef<Path>>(path: P) -> Result<(), EnvError> {
    apply_to_store(path, &mut ProcessEnv)
}
