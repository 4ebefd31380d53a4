// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::Url;

use super::net::server_address;
use super::{HttpCheck, PathCheck, Service, check_path, ensure, ensure_at_least_one};
use super::{wait_for_path, wait_for_server};
use crate::core::env::container::Env;
use crate::error::CheckError;

const POLL: Duration = Duration::from_millis(20);

#[test]
fn test_ensure() {
    let env: Env = [("SET", "value"), ("EMPTY", "")].into_iter().collect();

    assert!(ensure(&env, "SET"));
    assert!(ensure(&env, "EMPTY"));
    assert!(!ensure(&env, "UNSET"));
}

#[test]
fn test_ensure_at_least_one() {
    let env: Env = [("B", "1")].into_iter().collect();

    assert!(ensure_at_least_one(&env, &["A", "B"]));
    assert!(!ensure_at_least_one(&env, &["A", "C"]));
    assert!(!ensure_at_least_one::<&str>(&env, &[]));
}

#[test]
fn test_check_path_existing_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    assert!(check_path(file.path(), PathCheck::Existence));
    assert!(check_path(file.path(), PathCheck::Readable));
    assert!(check_path(file.path(), PathCheck::Writable));
}

#[test]
fn test_check_path_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    for check in [
        PathCheck::Existence,
        PathCheck::Readable,
        PathCheck::Writable,
        PathCheck::Executable,
    ] {
        assert!(!check_path(&missing, check), "{check:?}");
    }
}

#[test]
fn test_check_path_directory() {
    let dir = tempfile::tempdir().unwrap();

    assert!(check_path(dir.path(), PathCheck::Existence));
    assert!(check_path(dir.path(), PathCheck::Readable));
    assert!(check_path(dir.path(), PathCheck::Writable));
}

#[cfg(unix)]
#[test]
fn test_check_path_read_only_directory() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("data");
    std::fs::create_dir(&locked).unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    let reported = check_path(&locked, PathCheck::Writable);
    // Only privileged users may still create files here.
    let actual = std::fs::write(locked.join("marker"), "x").is_ok();

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(reported, actual);
    assert!(check_path(&locked, PathCheck::Writable));
}

#[cfg(unix)]
#[test]
fn test_check_path_read_only_file() {
    use std::os::unix::fs::PermissionsExt;

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o444)).unwrap();

    let reported = check_path(file.path(), PathCheck::Writable);
    let actual = std::fs::OpenOptions::new()
        .append(true)
        .open(file.path())
        .is_ok();

    assert_eq!(reported, actual);
}

#[cfg(unix)]
#[test]
fn test_check_path_executable_bits() {
    use std::os::unix::fs::PermissionsExt;

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o644)).unwrap();
    assert!(!check_path(file.path(), PathCheck::Executable));

    std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    assert!(check_path(file.path(), PathCheck::Executable));
}

#[test]
fn test_server_address() {
    let address = |url: &str| server_address(&Url::parse(url).unwrap());

    assert_eq!(address("http://example.com/path").unwrap(), "example.com:80");
    assert_eq!(address("https://example.com").unwrap(), "example.com:443");
    assert_eq!(address("http://localhost:8081/").unwrap(), "localhost:8081");
    assert_eq!(address("ftp://files:2121").unwrap(), "files:2121");
    assert!(matches!(
        address("ftp://files"),
        Err(CheckError::UnknownPort { scheme, .. }) if scheme == "ftp"
    ));
}

#[test]
fn test_http_check_url() {
    let check = HttpCheck::builder()
        .host("sr")
        .port(8081)
        .timeout(Duration::from_secs(1))
        .build();
    assert_eq!(check.url(), "http://sr:8081");

    let check = HttpCheck::builder()
        .host("ksql")
        .port(8088)
        .timeout(Duration::from_secs(1))
        .path("info")
        .secure(true)
        .build();
    assert_eq!(check.url(), "https://ksql:8088/info");
}

#[test]
fn test_service_endpoints() {
    let endpoints = [
        Service::SchemaRegistry,
        Service::KafkaRest,
        Service::Connect,
        Service::KsqlServer,
        Service::ControlCenter,
    ]
    .map(|service| (service.path(), service.body_marker()));

    assert_eq!(
        endpoints,
        [
            ("config", Some("compatibilityLevel")),
            ("topics", None),
            ("", Some("version")),
            ("info", Some("Ksql")),
            ("", Some("Control Center")),
        ]
    );
}

#[tokio::test]
async fn test_wait_for_server_reachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();

    assert!(wait_for_server(&address, Duration::from_secs(2), POLL).await);
}

#[tokio::test]
async fn test_wait_for_server_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    assert!(!wait_for_server(&address, Duration::from_millis(150), POLL).await);
}

#[tokio::test]
async fn test_wait_for_path_appears() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ready");

    let writer = {
        let target = target.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            std::fs::write(target, "ok").unwrap();
        })
    };

    assert!(wait_for_path(&target, Duration::from_secs(5), POLL).await);
    writer.await.unwrap();
}

#[tokio::test]
async fn test_wait_for_path_times_out() {
    let dir = tempfile::tempdir().unwrap();

    assert!(!wait_for_path(&dir.path().join("never"), Duration::from_millis(100), POLL).await);
}
