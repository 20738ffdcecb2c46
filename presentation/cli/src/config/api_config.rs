use std::env;
use std::time::Duration;

use anyhow::{Context, bail};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the remote storefront API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_API_URL: base URL of the products API (required)
    /// - STOREFRONT_HTTP_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = lookup("STOREFRONT_API_URL")
            .filter(|url| !url.trim().is_empty())
            .context("STOREFRONT_API_URL must be set")?;

        let timeout_secs = match lookup("STOREFRONT_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("STOREFRONT_HTTP_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("STOREFRONT_HTTP_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
