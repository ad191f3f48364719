// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment-file loading and environment-store abstraction.
//!
//! # Architecture
//!
//! ```text
//! file.rs  parse_line() --> EnvLine::Pair | EnvLine::Skip
//!          read_from_file()  pure, BTreeMap, ambient state untouched
//!          apply_from_file() read + ProcessEnv::merge()
//!
//! store.rs EnvironmentStore { get / set / merge }
//!          ProcessEnv  ambient process environment
//!          MemoryEnv   in-memory fake for tests
//! ```
//!
//! - **First `=` is the delimiter**; lines without one are skipped by policy
//! - **Last write wins** for duplicate keys
//! - **No caching**: the file is read fully and synchronously on each call

pub mod file;
pub mod store;

#[cfg(test)]
mod tests;

pub use file::{EnvLine, apply_from_file, apply_to_store, parse_line, read_from_file};
pub use store::{EnvironmentStore, MemoryEnv, ProcessEnv};
