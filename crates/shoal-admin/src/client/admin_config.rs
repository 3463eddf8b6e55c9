//! Configuration for the administrative API client.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use shoal_core::{Error, Result};
use url::Url;

/// Default timeout applied to administrative requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for connecting to the storage service's admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct AdminConfig {
    /// Base URL of the administrative API.
    #[cfg_attr(
        feature = "config",
        arg(long = "admin-endpoint", env = "SHOAL_ADMIN_ENDPOINT")
    )]
    pub endpoint: Url,

    /// Request timeout in seconds (optional).
    #[cfg_attr(
        feature = "config",
        arg(
            long = "admin-request-timeout",
            env = "SHOAL_ADMIN_REQUEST_TIMEOUT_SECS"
        )
    )]
    pub request_timeout: Option<u64>,

    /// User-Agent header sent with every request (optional).
    #[cfg_attr(
        feature = "config",
        arg(long = "admin-user-agent", env = "SHOAL_ADMIN_USER_AGENT")
    )]
    pub user_agent: Option<String>,
}

impl AdminConfig {
    /// Creates a new configuration for the given endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            request_timeout: None,
            user_agent: None,
        }
    }

    /// Overrides the request timeout, in seconds.
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = Some(seconds);
        self
    }

    /// Overrides the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Returns the effective request timeout.
    pub fn timeout(&self) -> Duration {
        match self.request_timeout {
            Some(0) | None => DEFAULT_TIMEOUT,
            Some(seconds) => Duration::from_secs(seconds),
        }
    }

    /// Returns the effective User-Agent header value.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(Self::default_user_agent)
    }

    /// Returns the default User-Agent for this crate version.
    fn default_user_agent() -> String {
        format!("shoal-admin/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.cannot_be_a_base() {
            return Err(Error::configuration()
                .with_message("endpoint URL cannot be used as a base for API paths"));
        }

        match self.endpoint.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::configuration()
                    .with_message(format!("unsupported endpoint scheme '{scheme}'")));
            }
        }

        if self.endpoint.host_str().is_none() {
            return Err(Error::configuration().with_message("endpoint URL has no host"));
        }

        Ok(())
    }
}
