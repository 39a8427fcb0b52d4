//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// `HOST` is not an IP address.
    #[error("invalid HOST: {0:?}")]
    InvalidHost(String),

    /// `API_ORIGIN` is not an absolute http(s) URL.
    #[error("invalid API_ORIGIN: {0:?} (expected http:// or https:// origin)")]
    InvalidApiOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Newsletter backend that `/api/*` is forwarded to. `None` disables the proxy.
    pub api_origin: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `API_ORIGIN`: e.g. `https://backend.example.com`; trailing `/` trimmed
    /// - `API_PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_host(std::env::var("HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_origin = parse_api_origin(std::env::var("API_ORIGIN").ok().as_deref())?;
        let proxy_timeout_secs = env_parse_u64("API_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS);
        Ok(Self { host, port, api_origin, proxy_timeout_secs })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_HOST),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidHost(v.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_api_origin(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    let rest = value.split_once("://").map_or("", |(_, rest)| rest);
    if !has_scheme || rest.trim_end_matches('/').is_empty() {
        return Err(ConfigError::InvalidApiOrigin(value.to_owned()));
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
