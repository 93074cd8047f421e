use std::net::SocketAddr;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// Analytics settings are read separately by `AnalyticsClientConfig::from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379"). `None` disables result storage
    /// and completion stats.
    pub redis_url: Option<String>,
    /// Serve MCP over streamable HTTP on this address instead of stdio.
    pub http_addr: Option<SocketAddr>,
    /// Expiry for stored visitor results. `None` keeps them until overwritten.
    pub result_ttl_secs: Option<u64>,
}

impl Config {
    /// Optional:
    /// - `REDIS_URL`: Redis connection string
    /// - `TEAM_DNA_HTTP_ADDR`: e.g. "0.0.0.0:8080"
    /// - `TEAM_DNA_RESULT_TTL_SECS`: positive integer
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let redis_url = lookup("REDIS_URL").filter(|s| !s.trim().is_empty());

        let http_addr = lookup("TEAM_DNA_HTTP_ADDR")
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim().parse::<SocketAddr>().map_err(|e| {
                    AppError::Config(format!("TEAM_DNA_HTTP_ADDR '{s}' is not a socket address: {e}"))
                })
            })
            .transpose()?;

        let result_ttl_secs = lookup("TEAM_DNA_RESULT_TTL_SECS")
            .filter(|s| !s.trim().is_empty())
            .map(|s| match s.trim().parse::<u64>() {
                Ok(ttl) if ttl > 0 => Ok(ttl),
                _ => Err(AppError::Config(format!(
                    "TEAM_DNA_RESULT_TTL_SECS must be a positive integer, got '{s}'"
                ))),
            })
            .transpose()?;

        Ok(Self {
            redis_url,
            http_addr,
            result_ttl_secs,
        })
    }
}
