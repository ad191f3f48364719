// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment and process management.
//!
//! ```text
//!          core
//!           |
//!     +-----+-----+
//!     |           |
//!     v           v
//!    env       process
//!     |           |
//!  EnvLine     Builder
//!  Store       Output
//! ```

pub mod env;
pub mod process;
