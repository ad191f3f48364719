// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            DevkitError (~24 bytes)
//!                   |
//!   +------+-------+-------+--------+
//!   |      |       |       |        |
//!   v      v       v       v        v
//! Bail   Env     Cfg    Proc   Db/Export/Io
//!        Box     Box     Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Env     ReadError
//!   Config  MissingKey, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Db      InvalidUrl, MissingComponent, Postgres
//!   Export  MissingArgument, EmptyTable, Csv
//!
//! All variants boxed => DevkitError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DevkitError`].
pub type DevkitResult<T> = std::result::Result<T, DevkitError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DevkitError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Environment-file error.
    #[error("env error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Database error.
    #[error("database error: {0}")]
    Db(#[from] Box<DbError>),

    /// CSV export error.
    #[error("export error: {0}")]
    Export(#[from] Box<ExportError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`DevkitError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> DevkitError {
    DevkitError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DevkitError {
                fn from(err: $error) -> Self {
                    DevkitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
    ProcessError => Process,
    DbError => Db,
    ExportError => Export,
    std::io::Error => Io,
}

// --- Environment-file Errors ---

/// Environment-file errors.
///
/// A malformed line (no `=` delimiter) is NOT an error; it is skipped by
/// policy. Only file access failures surface here.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Failed to open or read the environment file.
    #[error("failed to read env file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
///
/// File read and TOML parse failures surface through the `config` crate's
/// own error type; only validation failures live here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Database Errors ---

/// Database connection and query errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection URL could not be parsed at all.
    #[error("invalid database url: {0}")]
    InvalidUrl(String),

    /// The connection URL parsed but lacks a required component.
    #[error("database url is missing its {component}")]
    MissingComponent { component: &'static str },

    /// Error from the Postgres client.
    #[error("postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

// --- Export Errors ---

/// Table-to-CSV export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A required command-line argument was not supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The named table has no columns (it most likely does not exist).
    #[error("table '{0}' has no columns")]
    EmptyTable(String),

    /// Error from the CSV writer.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests;
