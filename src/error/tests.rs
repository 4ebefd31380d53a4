// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CheckError, SpecError, UbError, UbResult, sink_error};

#[test]
fn test_spec_error_display() {
    let err = SpecError::Read {
        path: "/etc/spec.json".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to read spec file '/etc/spec.json': no such file"
    );
}

#[test]
fn test_check_error_display() {
    let err: UbError = CheckError::UnknownPort {
        url: "ftp://broker".to_string(),
        scheme: "ftp".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"check error: no port in 'ftp://broker' and cannot infer one for scheme 'ftp' (only http(s) supported)"
    );
}

#[test]
fn test_sink_error_display() {
    let err = sink_error(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "pipe closed",
    ));
    insta::assert_snapshot!(err.to_string(), @"failed to write output: pipe closed");
}

#[test]
fn test_ub_error_size() {
    // Box<str> variants are 16 bytes (fat pointer) plus discriminant
    let size = std::mem::size_of::<UbError>();
    assert!(size <= 24, "UbError is {size} bytes, expected <= 24");
}

#[test]
fn test_ub_result_size() {
    let size = std::mem::size_of::<UbResult<()>>();
    assert!(size <= 24, "UbResult<()> is {size} bytes, expected <= 24");
}
