// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the readiness checks.
//!
//! ```text
//! $ ub ensure KAFKA_ZOOKEEPER_CONNECT
//! $ ub path /var/lib/kafka/data writable
//! $ ub wait zookeeper:2181 30
//! $ ub sr-ready schema-registry 8081 60 --secure --username admin --password secret
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::check::PathCheck;

#[derive(Debug, Clone, Args)]
pub struct EnsureArgs {
    #[arg(value_name = "VAR")]
    pub variable: String,
}

#[derive(Debug, Clone, Args)]
pub struct EnsureAtLeastOneArgs {
    #[arg(value_name = "VAR", required = true)]
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[arg(value_name = "OP")]
    pub check: PathCheck,
}

#[derive(Debug, Clone, Args)]
pub struct PathWaitArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Timeout in seconds.
    #[arg(value_name = "TIMEOUT")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Args)]
pub struct WaitArgs {
    /// Address as HOST:PORT.
    #[arg(value_name = "HOST:PORT")]
    pub address: String,

    /// Timeout in seconds.
    #[arg(value_name = "TIMEOUT")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Args)]
pub struct HttpReadyArgs {
    #[arg(value_name = "URL")]
    pub url: String,

    /// Timeout in seconds.
    #[arg(value_name = "TIMEOUT")]
    pub timeout: u64,
}

/// Arguments shared by the REST service checks.
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    #[arg(value_name = "HOST")]
    pub host: String,

    #[arg(value_name = "PORT")]
    pub port: u16,

    /// Timeout in seconds.
    #[arg(value_name = "TIMEOUT")]
    pub timeout: u64,

    /// Use TLS to secure the connection.
    #[arg(long)]
    pub secure: bool,

    /// Ignore TLS certificate errors.
    #[arg(long = "ignore-cert", alias = "ignore_cert")]
    pub ignore_cert: bool,

    /// Username for basic authentication.
    #[arg(long, value_name = "USER")]
    pub username: Option<String>,

    /// Password for basic authentication.
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ListenersArgs {
    /// Advertised listeners, e.g. `PLAINTEXT://broker:9092`.
    #[arg(value_name = "ADVERTISED")]
    pub advertised: String,
}
