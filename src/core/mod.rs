// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules shared by every command.
//!
//! ```text
//!   core
//!    |
//!    v
//!   env
//!    |
//!   Env snapshot (read-only, shared via Arc)
//!   current_env(): the only reader of the process environment
//! ```

pub mod env;
