// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JVM-backed admin checks.
//!
//! ```text
//! JavaCommand::kafka_ready / zk_ready / ensure_topic
//!        |
//!        v
//! command_line(classpath)
//!   [KAFKA_OPTS...] -cp <classpath> <class> <args...>
//!        |
//!        v
//! run(java, classpath)
//!   which(java) --> tokio::process::Command --> exit 0?
//! ```
//!
//! Timeouts are given in seconds and passed on in milliseconds.

use std::process::Stdio;

use bon::Builder;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::core::env::container::Env;
use crate::error::{AdminError, UbResult};

pub const KAFKA_READY_CLASS: &str = "io.confluent.admin.utils.cli.KafkaReadyCommand";
pub const ZOOKEEPER_READY_CLASS: &str = "io.confluent.admin.utils.cli.ZookeeperReadyCommand";
pub const TOPIC_ENSURE_CLASS: &str = "io.confluent.kafkaensure.cli.TopicEnsureCommand";

const JVM_OPTS_VAR: &str = "KAFKA_OPTS";
const ZOOKEEPER_SASL_VAR: &str = "ZOOKEEPER_SASL_ENABLED";

/// Arguments of the broker readiness check.
#[derive(Debug, Clone, Builder)]
pub struct KafkaReady {
    min_brokers: u32,
    timeout_secs: u64,
    #[builder(into)]
    bootstrap_servers: Option<String>,
    #[builder(into)]
    zookeeper_connect: Option<String>,
    #[builder(into)]
    config: Option<String>,
    #[builder(into)]
    security_protocol: Option<String>,
}

/// Arguments of the topic creation/validation tool.
#[derive(Debug, Clone, Builder)]
pub struct EnsureTopic {
    #[builder(into)]
    config: String,
    #[builder(into)]
    topic_file: String,
    timeout_secs: u64,
    #[builder(default)]
    create_if_not_exists: bool,
}

/// An invocation of one of the Confluent admin classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaCommand {
    class: &'static str,
    jvm_opts: Vec<String>,
    args: Vec<String>,
}

fn millis(timeout_secs: u64) -> String {
    format!("{timeout_secs}000")
}

fn jvm_opts(env: &Env) -> Vec<String> {
    env.get(JVM_OPTS_VAR)
        .map(|opts| opts.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

impl JavaCommand {
    #[must_use]
    pub fn kafka_ready(request: &KafkaReady, env: &Env) -> Self {
        let mut args = vec![request.min_brokers.to_string(), millis(request.timeout_secs)];
        let flags = [
            ("-b", &request.bootstrap_servers),
            ("-z", &request.zookeeper_connect),
            ("-c", &request.config),
            ("-s", &request.security_protocol),
        ];
        for (flag, value) in flags {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                args.extend([flag.to_string(), value.to_string()]);
            }
        }

        Self {
            class: KAFKA_READY_CLASS,
            jvm_opts: jvm_opts(env),
            args,
        }
    }

    /// JVM options are taken from `KAFKA_OPTS` unless `ZOOKEEPER_SASL_ENABLED` is `false`.
    #[must_use]
    pub fn zk_ready(connect: &str, timeout_secs: u64, env: &Env) -> Self {
        let sasl_disabled = env
            .get(ZOOKEEPER_SASL_VAR)
            .is_some_and(|v| v.eq_ignore_ascii_case("false"));

        Self {
            class: ZOOKEEPER_READY_CLASS,
            jvm_opts: if sasl_disabled { Vec::new() } else { jvm_opts(env) },
            args: vec![connect.to_string(), millis(timeout_secs)],
        }
    }

    #[must_use]
    pub fn ensure_topic(request: &EnsureTopic, env: &Env) -> Self {
        let timeout = millis(request.timeout_secs);
        let args = [
            "--config",
            request.config.as_str(),
            "--file",
            request.topic_file.as_str(),
            "--create-if-not-exists",
            if request.create_if_not_exists { "true" } else { "false" },
            "--timeout",
            timeout.as_str(),
        ]
        .map(str::to_string)
        .to_vec();

        Self {
            class: TOPIC_ENSURE_CLASS,
            jvm_opts: jvm_opts(env),
            args,
        }
    }

    #[must_use]
    pub const fn class(&self) -> &'static str {
        self.class
    }

    /// Arguments passed to `java`.
    #[must_use]
    pub fn command_line(&self, classpath: &str) -> Vec<String> {
        let mut line = self.jvm_opts.clone();
        line.extend(["-cp".to_string(), classpath.to_string(), self.class.to_string()]);
        line.extend(self.args.iter().cloned());
        line
    }

    /// Runs the class and reports whether it exited with status 0.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::JavaNotFound`] if `java` cannot be resolved and
    /// [`AdminError::SpawnFailed`] if the process cannot be started.
    pub async fn run(&self, java: &str, classpath: &str) -> UbResult<bool> {
        let program = which::which(java).map_err(|_| AdminError::JavaNotFound {
            name: java.to_string(),
        })?;
        let line = self.command_line(classpath);
        debug!(program = %program.display(), args = ?line, "launching admin command");

        let status = Command::new(&program)
            .args(&line)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| AdminError::SpawnFailed {
                command: format!("{} {}", program.display(), line.join(" ")),
                source,
            })?;

        if status.success() {
            info!(class = self.class, "admin command succeeded");
        } else {
            warn!(class = self.class, %status, "admin command failed");
        }
        Ok(status.success())
    }
}
