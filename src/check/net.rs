// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network readiness checks.
//!
//! ```text
//! wait_for_server("host:port")
//!   connect --refused--> sleep(poll) --> connect ...
//!      |
//!      +--ok--> true          timeout --> false
//!
//! wait_for_http(url)
//!   server_address(url) --> wait_for_server --> GET --> 2xx?
//!
//! HttpCheck { host, port, path, secure, ignore_cert, auth }
//!   wait_for_server --> GET scheme://host:port/path --> 2xx? --> body marker?
//! ```

use std::time::Duration;

use bon::Builder;
use reqwest::{Client, Url};
use tokio::net::TcpStream;
use tracing::{debug, trace, warn};

use crate::error::{CheckError, UbResult};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Tries to open a TCP connection to `address` until it succeeds or `timeout` elapses.
pub async fn wait_for_server(address: &str, timeout: Duration, poll_interval: Duration) -> bool {
    let connect = async {
        loop {
            match TcpStream::connect(address).await {
                Ok(_) => return,
                Err(err) => {
                    trace!(address, error = %err, "not reachable yet");
                    tokio::time::sleep(poll_interval).await;
                }
            }
        }
    };

    let reached = tokio::time::timeout(timeout, connect).await.is_ok();
    if !reached {
        warn!(address, ?timeout, "could not reach address");
    }
    reached
}

/// Derives `host:port` from a URL, inferring the port for http and https.
///
/// # Errors
///
/// Returns [`CheckError::InvalidUrl`] if the URL has no host and
/// [`CheckError::UnknownPort`] if no port is given for another scheme.
pub fn server_address(url: &Url) -> Result<String, CheckError> {
    let host = url.host_str().ok_or_else(|| CheckError::InvalidUrl {
        url: url.to_string(),
        message: "missing host".to_string(),
    })?;

    let port = match (url.port(), url.scheme()) {
        (Some(port), _) => port,
        (None, "http") => 80,
        (None, "https") => 443,
        (None, scheme) => {
            return Err(CheckError::UnknownPort {
                url: url.to_string(),
                scheme: scheme.to_string(),
            });
        }
    };

    Ok(format!("{host}:{port}"))
}

/// Waits for the server behind `url` to accept connections, then requires a 2xx GET.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, carries no usable port,
/// or the HTTP client cannot be built.
pub async fn wait_for_http(url: &str, timeout: Duration, poll_interval: Duration) -> UbResult<bool> {
    let parsed = Url::parse(url).map_err(|err| CheckError::InvalidUrl {
        url: url.to_string(),
        message: err.to_string(),
    })?;
    let address = server_address(&parsed)?;

    if !wait_for_server(&address, timeout, poll_interval).await {
        return Ok(false);
    }

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(CheckError::from)?;

    match client.get(parsed).send().await {
        Ok(response) if response.status().is_success() => Ok(true),
        Ok(response) => {
            warn!(url, status = %response.status(), "unexpected status");
            Ok(false)
        }
        Err(err) => {
            warn!(url, error = %err, "error retrieving url");
            Ok(false)
        }
    }
}

/// REST services with a known readiness endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    SchemaRegistry,
    KafkaRest,
    Connect,
    KsqlServer,
    ControlCenter,
}

impl Service {
    /// Path queried on the service, relative to its root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SchemaRegistry => "config",
            Self::KafkaRest => "topics",
            Self::Connect | Self::ControlCenter => "",
            Self::KsqlServer => "info",
        }
    }

    /// Text the response body must contain, if any.
    #[must_use]
    pub const fn body_marker(self) -> Option<&'static str> {
        match self {
            Self::SchemaRegistry => Some("compatibilityLevel"),
            Self::KafkaRest => None,
            Self::Connect => Some("version"),
            Self::KsqlServer => Some("Ksql"),
            Self::ControlCenter => Some("Control Center"),
        }
    }
}

/// HTTP readiness probe against `host:port`.
///
/// # Example
///
/// ```no_run
/// # async fn probe() -> ub_rs::error::UbResult<()> {
/// use std::time::Duration;
/// use ub_rs::check::{HttpCheck, Service};
///
/// let ready = HttpCheck::builder()
///     .host("schema-registry")
///     .port(8081)
///     .timeout(Duration::from_secs(30))
///     .build()
///     .check_service(Service::SchemaRegistry)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Builder)]
pub struct HttpCheck {
    #[builder(into)]
    host: String,
    port: u16,
    timeout: Duration,
    #[builder(into, default)]
    path: String,
    #[builder(default)]
    secure: bool,
    #[builder(default)]
    ignore_cert: bool,
    #[builder(into)]
    username: Option<String>,
    #[builder(into)]
    password: Option<String>,
    #[builder(default = DEFAULT_POLL_INTERVAL)]
    poll_interval: Duration,
}

impl HttpCheck {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL that is requested.
    #[must_use]
    pub fn url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        let base = format!("{scheme}://{}", self.address());
        if self.path.is_empty() {
            base
        } else {
            format!("{base}/{}", self.path)
        }
    }

    /// Runs the probe against the readiness endpoint of `service`.
    ///
    /// # Errors
    ///
    /// See [`HttpCheck::run`].
    pub async fn check_service(mut self, service: Service) -> UbResult<bool> {
        service.path().clone_into(&mut self.path);
        self.run(service.body_marker()).await
    }

    /// Waits for the port, then requires a 2xx GET whose body contains `marker` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub async fn run(&self, marker: Option<&str>) -> UbResult<bool> {
        let address = self.address();
        if !wait_for_server(&address, self.timeout, self.poll_interval).await {
            return Ok(false);
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.ignore_cert)
            .build()
            .map_err(CheckError::from)?;

        let url = self.url();
        let mut request = client.get(&url);
        if self.username.is_some() || self.password.is_some() {
            request = request.basic_auth(
                self.username.as_deref().unwrap_or_default(),
                self.password.as_deref(),
            );
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(url, error = %err, "error performing request");
                return Ok(false);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "request failed");
            return Ok(false);
        }

        let Some(marker) = marker else {
            return Ok(true);
        };

        match response.text().await {
            Ok(body) => {
                let found = body.contains(marker);
                debug!(url, marker, found, "checked response body");
                Ok(found)
            }
            Err(err) => {
                warn!(url, error = %err, "error reading response");
                Ok(false)
            }
        }
    }
}
