//! Web Configuration

use kernel::error::app_error::AppResult;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `WEB_PORT` is unset, zero, or not a number
pub const DEFAULT_WEB_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Interface to bind (`BIND_ADDR`)
    pub bind_addr: IpAddr,
    /// Listen port (`WEB_PORT`)
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_WEB_PORT,
        }
    }
}

impl WebConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse()?,
            None => Self::default().bind_addr,
        };

        let port = match lookup("WEB_PORT").map(|raw| raw.trim().parse::<u16>()) {
            Some(Ok(port)) if port != 0 => port,
            Some(Ok(_)) | None => DEFAULT_WEB_PORT,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "WEB_PORT is not a valid port number, using default");
                DEFAULT_WEB_PORT
            }
        };

        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
