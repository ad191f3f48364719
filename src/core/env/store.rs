// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment-store abstraction over ambient process state.
//!
//! The side-effecting loader path writes through [`EnvironmentStore`] so the
//! global mutation is explicit and unit-testable against [`MemoryEnv`].

use std::collections::BTreeMap;
use tracing::warn;

/// A writable key/value store of environment variables.
pub trait EnvironmentStore {
    /// Returns the value for `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str);

    /// Merges all pairs into the store. Existing keys are overwritten.
    fn merge(&mut self, vars: &BTreeMap<String, String>) {
        for (key, value) in vars {
            self.set(key, value);
        }
    }
}

/// The ambient process-wide environment.
///
/// Writes are visible to the whole process and inherited by child processes.
/// Pairs the OS cannot represent (empty key, `=` or NUL in the key, NUL in
/// the value) are skipped with a warning instead of aborting.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // `std::env::set_var` panics on these; a mapping entry like the one
        // parsed from "=bar" is valid data but has no ambient counterpart.
        if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
            warn!(key = %key, "skipping variable the process environment cannot hold");
            return;
        }
        // SAFETY: callers are single-threaded command setup paths; nothing
        // reads the environment concurrently within this program's scope.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// An in-memory environment store.
///
/// Stand-in for [`ProcessEnv`] wherever the ambient environment must stay
/// untouched, tests above all.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates a store pre-populated from a map.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Returns the full contents as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }

    /// Returns an iterator over the stored variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl EnvironmentStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
