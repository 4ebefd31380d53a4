// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   render   writes to the given sink, Ok(()) or Err
//!   check    Ok(true) ready, Ok(false) not ready, Err cannot run
//!   admin    Ok(exit status == 0)
//! ```

pub mod admin;
pub mod check;
pub mod render;
