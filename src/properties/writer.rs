// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Properties serialization.
//!
//! ```text
//! # created by 'ub' from environment variables on 2026-10-16 09:30:00.123 +00:00
//! bootstrap.servers=broker:9092
//! log.dirs=/var/lib/kafka/data
//! ```

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::io::Write;

use super::builder::Properties;
use crate::error::{UbResult, sink_error};

/// Text every heritage line starts with.
pub const HERITAGE_PREFIX: &str = "# created by 'ub' from environment variables on ";

/// Heritage comment stamped with the current local time.
#[must_use]
pub fn format_heritage() -> String {
    format_heritage_at(&Local::now())
}

/// Heritage comment stamped with `timestamp`.
#[must_use]
pub fn format_heritage_at<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{HERITAGE_PREFIX}{}",
        timestamp.format("%Y-%m-%d %H:%M:%S%.f %:z")
    )
}

/// Writes the heritage line and then every property as `key=value`.
///
/// # Errors
///
/// Returns [`crate::error::UbError::Sink`] on the first failed write.
pub fn write_config<W: Write>(out: &mut W, properties: &Properties) -> UbResult<()> {
    write_config_with_heritage(out, &format_heritage(), properties)
}

/// Like [`write_config`] with a caller-supplied heritage line.
///
/// Keys come out in ascending byte order; values are written verbatim.
///
/// # Errors
///
/// Returns [`crate::error::UbError::Sink`] on the first failed write.
pub fn write_config_with_heritage<W: Write>(
    out: &mut W,
    heritage: &str,
    properties: &Properties,
) -> UbResult<()> {
    writeln!(out, "{heritage}").map_err(sink_error)?;
    for (key, value) in properties {
        writeln!(out, "{key}={value}").map_err(sink_error)?;
    }
    out.flush().map_err(sink_error)
}
