// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                 current_env() (once)
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          render / check / admin
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, UB_*, CLI flags    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!            properties    template   check / admin
//!            spec, keys,    Tera +    TCP, HTTP, paths,
//!            writer        functions  java child process
//!
//!   +-----------------------------------------+
//!   |  core   Env snapshot                    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! `properties` and `template` are synchronous and pure apart from the sink
//! they write to. Polling and retries live in `check` and `admin` only.

pub mod admin;
pub mod check;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod properties;
pub mod template;
