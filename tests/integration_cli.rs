// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with the argument patterns used by Confluent image
//! entrypoint scripts.

use clap::Parser;
use ub_rs::check::PathCheck;
use ub_rs::cli::{Cli, Command};
use ub_rs::logging::LogLevel;

// =============================================================================
// Render Commands
// =============================================================================

#[test]
fn cli_render_properties_prefix() {
    let cli = Cli::try_parse_from(["ub", "render-properties-prefix", "KAFKA"]).unwrap();
    let Command::RenderPropertiesPrefix(args) = cli.command else {
        panic!("unexpected command {:?}", cli.command);
    };
    assert_eq!(args.prefix, "KAFKA");
    assert_eq!(cli.global.log_level, None);
}

#[test]
fn cli_render_requires_argument() {
    for command in ["render-template", "render-properties", "render-properties-prefix"] {
        assert!(Cli::try_parse_from(["ub", command]).is_err(), "{command}");
    }
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["ub", "explode"]).is_err());
    assert!(Cli::try_parse_from(["ub"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "ub",
        "--config",
        "/etc/ub/ub.toml",
        "--log-level",
        "3",
        "ensure",
        "KAFKA_ZOOKEEPER_CONNECT",
    ])
    .unwrap();

    assert_eq!(
        cli.global.config.as_deref(),
        Some(std::path::Path::new("/etc/ub/ub.toml"))
    );
    assert_eq!(cli.global.log_level, Some(LogLevel::INFO));
    assert!(matches!(cli.command, Command::Ensure(ref args) if args.variable == "KAFKA_ZOOKEEPER_CONNECT"));
}

// =============================================================================
// Checks
// =============================================================================

#[test]
fn cli_path_operations() {
    for (op, expected) in [
        ("readable", PathCheck::Readable),
        ("writable", PathCheck::Writable),
        ("executable", PathCheck::Executable),
        ("existence", PathCheck::Existence),
    ] {
        let cli = Cli::try_parse_from(["ub", "path", "/etc/kafka", op]).unwrap();
        assert!(matches!(cli.command, Command::Path(ref args) if args.check == expected), "{op}");
    }
}

#[test]
fn cli_wait_and_path_wait() {
    let cli = Cli::try_parse_from(["ub", "wait", "zookeeper:2181", "30"]).unwrap();
    assert!(
        matches!(cli.command, Command::Wait(ref args) if args.address == "zookeeper:2181" && args.timeout == 30)
    );

    let cli = Cli::try_parse_from(["ub", "path-wait", "/var/run/ready", "10"]).unwrap();
    assert!(matches!(cli.command, Command::PathWait(ref args) if args.timeout == 10));

    assert!(Cli::try_parse_from(["ub", "wait", "zookeeper:2181", "soon"]).is_err());
}

#[test]
fn cli_service_checks_share_arguments() {
    for verb in [
        "sr-ready",
        "kr-ready",
        "connect-ready",
        "ksql-server-ready",
        "control-center-ready",
    ] {
        let cli = Cli::try_parse_from(["ub", verb, "localhost", "8080", "20"]).unwrap();
        let args = match cli.command {
            Command::SrReady(args)
            | Command::KrReady(args)
            | Command::ConnectReady(args)
            | Command::KsqlServerReady(args)
            | Command::ControlCenterReady(args) => args,
            other => panic!("unexpected command {other:?}"),
        };
        assert_eq!(args.host, "localhost", "{verb}");
        assert_eq!(args.port, 8080, "{verb}");
        assert!(!args.secure && !args.ignore_cert, "{verb}");
        assert_eq!(args.username, None, "{verb}");
    }
}

#[test]
fn cli_service_check_rejects_bad_port() {
    assert!(Cli::try_parse_from(["ub", "sr-ready", "localhost", "99999", "20"]).is_err());
}

// =============================================================================
// Admin Commands
// =============================================================================

#[test]
fn cli_zk_ready() {
    let cli = Cli::try_parse_from(["ub", "zk-ready", "zookeeper:2181", "40"]).unwrap();
    assert!(
        matches!(cli.command, Command::ZkReady(ref args) if args.connect == "zookeeper:2181" && args.timeout == 40)
    );
}

#[test]
fn cli_ensure_topic_defaults() {
    let cli = Cli::try_parse_from(["ub", "ensure-topic", "a.properties", "t.yaml", "5"]).unwrap();
    assert!(matches!(cli.command, Command::EnsureTopic(ref args) if !args.create_if_not_exists));
}

#[test]
fn cli_ensure_topic_single_dash_flag() {
    let cli = ub_rs::cli::try_parse_from([
        "ub",
        "ensure-topic",
        "-create_if_not_exists",
        "client.properties",
        "topics.yaml",
        "60",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::EnsureTopic(ref args) if args.create_if_not_exists));
}

// =============================================================================
// Exit Status
// =============================================================================

fn run_ub(args: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_ub"))
        .args(args)
        .env("UB_CLI_TEST_SET", "1")
        .env_remove("UB_CLI_TEST_UNSET")
        .output()
        .unwrap()
}

#[test]
fn cli_retired_template_command_exits_2() {
    let output = run_ub(&["template"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("render-template"));
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_check_exit_status() {
    assert_eq!(run_ub(&["ensure", "UB_CLI_TEST_SET"]).status.code(), Some(0));
    assert_eq!(run_ub(&["ensure", "UB_CLI_TEST_UNSET"]).status.code(), Some(1));
}

#[test]
fn cli_listeners_prints_to_stdout() {
    let output = run_ub(&["listeners", "PLAINTEXT://kafka:9092"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "PLAINTEXT://0.0.0.0:9092\n");
}
