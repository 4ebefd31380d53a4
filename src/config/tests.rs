// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DEFAULT_CLASSPATH, Settings};
use crate::core::env::container::Env;
use crate::logging::LogLevel;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_settings() {
    let settings = Settings::builder().build().unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_level, LogLevel::WARN);
    assert_eq!(settings.poll_interval(), Duration::from_secs(1));
    assert_eq!(settings.classpath, DEFAULT_CLASSPATH);
}

#[test]
fn test_settings_parse() {
    let settings = Settings::parse(
        r#"
log_level = 4
poll_interval_ms = 200
java = "/opt/jdk/bin/java"
"#,
    )
    .unwrap();

    assert_eq!(settings.log_level, LogLevel::DEBUG);
    assert_eq!(settings.poll_interval(), Duration::from_millis(200));
    assert_eq!(settings.java, "/opt/jdk/bin/java");
    assert_eq!(settings.classpath, DEFAULT_CLASSPATH);
}

#[test]
fn test_settings_log_level_by_name() {
    let settings = Settings::parse(r#"log_level = "trace""#).unwrap();
    assert_eq!(settings.log_level, LogLevel::TRACE);
}

#[test]
fn test_settings_invalid_log_level() {
    assert!(Settings::parse("log_level = 42").is_err());
}

#[test]
fn test_settings_from_env_snapshot() {
    let env: Env = [
        ("UB_LOG_LEVEL", "info"),
        ("UB_POLL_INTERVAL_MS", "250"),
        ("CUB_CLASSPATH", "/opt/jars/*"),
        ("KAFKA_LOG_LEVEL", "ignored"),
    ]
    .into_iter()
    .collect();

    let settings = Settings::builder().with_env(&env).build().unwrap();

    assert_eq!(settings.log_level, LogLevel::INFO);
    assert_eq!(settings.poll_interval_ms, 250);
    assert_eq!(settings.classpath, "/opt/jars/*");
}

#[test]
fn test_env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "poll_interval_ms = 5000\nlog_file = \"/tmp/ub.log\"").unwrap();
    let env: Env = [("UB_POLL_INTERVAL_MS", "10")].into_iter().collect();

    let settings = Settings::builder()
        .add_toml_file(file.path())
        .with_env(&env)
        .build()
        .unwrap();

    assert_eq!(settings.poll_interval_ms, 10);
    assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/ub.log")));
}

#[test]
fn test_set_overrides_everything() {
    let env: Env = [("UB_LOG_LEVEL", "1")].into_iter().collect();

    let settings = Settings::builder()
        .add_toml_str("log_level = 2")
        .with_env(&env)
        .set("log_level", 5_i64)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.log_level, LogLevel::TRACE);
}

#[test]
fn test_missing_required_file() {
    let result = Settings::builder()
        .add_toml_file("/nonexistent/ub/ub.toml")
        .build();
    assert!(result.is_err());
}
