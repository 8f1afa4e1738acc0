//! Relay configuration.
//!
//! Loaded once at startup from the environment and handed to the components
//! that need it. Nothing reads the environment after `main`.

use std::{net::SocketAddr, time::Duration};

use anyhow::{bail, Context, Result};

/// Program identifier reported by the status endpoint.
pub const PROGRAM: &str = "dnsimple-strillone";

/// Relay configuration (env-driven).
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// DNSimple app URL used as the base of every link.
    pub dnsimple_url: String,

    /// Slack incoming-webhook host.
    pub slack_url: String,

    /// How long a processed request identifier suppresses re-delivery.
    pub cache_ttl: Duration,

    /// Interval between expired-entry sweeps.
    pub cache_sweep_interval: Duration,

    /// Timeout for the outbound Slack call.
    pub delivery_timeout: Duration,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            dnsimple_url: "https://dnsimple.com".to_string(),
            slack_url: "https://hooks.slack.com".to_string(),
            cache_ttl: Duration::from_secs(300),
            cache_sweep_interval: Duration::from_secs(60),
            delivery_timeout: Duration::from_secs(10),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = match var("STRILLONE_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .context("STRILLONE_LISTEN_ADDR must be a socket address (host:port).")?,
            None => {
                let port: u16 = var("PORT")
                    .map(|v| v.parse())
                    .transpose()
                    .context("PORT must be a port number.")?
                    .unwrap_or(defaults.listen_addr.port());
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let dnsimple_url = var("DNSIMPLE_URL").unwrap_or(defaults.dnsimple_url);
        validate_http_url("DNSIMPLE_URL", &dnsimple_url)?;

        let slack_url = var("SLACK_URL").unwrap_or(defaults.slack_url);
        validate_http_url("SLACK_URL", &slack_url)?;

        let cache_ttl = duration_secs_var(&var, "STRILLONE_CACHE_TTL_SECS")?
            .unwrap_or(defaults.cache_ttl);
        let cache_sweep_interval = duration_secs_var(&var, "STRILLONE_CACHE_SWEEP_SECS")?
            .unwrap_or(defaults.cache_sweep_interval);
        let delivery_timeout = duration_secs_var(&var, "STRILLONE_DELIVERY_TIMEOUT_SECS")?
            .unwrap_or(defaults.delivery_timeout);

        let log_level = var("STRILLONE_LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            listen_addr,
            dnsimple_url,
            slack_url,
            cache_ttl,
            cache_sweep_interval,
            delivery_timeout,
            log_level,
        })
    }
}

/// Reads a positive number of seconds. Zero is rejected.
fn duration_secs_var(
    var: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<Duration>> {
    let secs: Option<u64> = var(name)
        .map(|v| v.parse())
        .transpose()
        .with_context(|| format!("{name} must be an integer (seconds)."))?;
    if secs == Some(0) {
        bail!("{name} must be at least 1 second.");
    }
    Ok(secs.map(Duration::from_secs))
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        bail!("{name} must be an http(s) URL, got {value:?}.");
    }
    Ok(())
}
