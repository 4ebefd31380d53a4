// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the JVM admin commands.
//!
//! ```text
//! $ ub kafka-ready 1 60 -b broker:9092 -c /etc/kafka/admin.properties
//! $ ub zk-ready zookeeper:2181 60
//! $ ub ensure-topic /etc/kafka/client.properties /etc/kafka/topics.yaml 60 --create-if-not-exists
//! ```

use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct KafkaReadyArgs {
    /// Minimum number of live brokers.
    #[arg(value_name = "MIN_BROKERS")]
    pub min_brokers: u32,

    /// Timeout in seconds.
    #[arg(value_name = "TIMEOUT")]
    pub timeout: u64,

    /// Bootstrap broker list.
    #[arg(short = 'b', value_name = "SERVERS")]
    pub bootstrap_servers: Option<String>,

    /// ZooKeeper connect string.
    #[arg(short = 'z', value_name = "CONNECT")]
    pub zookeeper_connect: Option<String>,

    /// Path to client config properties.
    #[arg(id = "client_config", short = 'c', value_name = "FILE")]
    pub config: Option<String>,

    /// Security protocol.
    #[arg(short = 's', value_name = "PROTOCOL")]
    pub security_protocol: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ZkReadyArgs {
    /// ZooKeeper connect string.
    #[arg(value_name = "CONNECT")]
    pub connect: String,

    /// Timeout in seconds.
    #[arg(value_name = "TIMEOUT")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Args)]
pub struct EnsureTopicArgs {
    /// Client config properties.
    #[arg(id = "client_config", value_name = "CONFIG")]
    pub config: String,

    /// Topic definitions.
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Timeout in seconds.
    #[arg(value_name = "TIMEOUT")]
    pub timeout: u64,

    /// Create topics that do not exist yet.
    #[arg(long = "create-if-not-exists", alias = "create_if_not_exists")]
    pub create_if_not_exists: bool,
}
