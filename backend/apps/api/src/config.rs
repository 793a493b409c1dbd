//! API Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded by `main`).

use kernel::error::app_error::AppResult;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `PORT` is unset, zero, or not a number
pub const DEFAULT_PORT: u16 = 3001;

/// Origins allowed by CORS when `FRONTEND_ORIGINS` is unset
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to bind (`BIND_ADDR`)
    pub bind_addr: IpAddr,
    /// Listen port (`PORT`)
    pub port: u16,
    /// Browser origins allowed to call the API (`FRONTEND_ORIGINS`)
    pub frontend_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            frontend_origins: split_origins(DEFAULT_FRONTEND_ORIGINS),
        }
    }
}

impl ApiConfig {
    /// Load from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse()?,
            None => defaults.bind_addr,
        };

        let port = lookup("PORT")
            .map(|raw| parse_port(&raw))
            .unwrap_or(DEFAULT_PORT);

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.frontend_origins);

        Ok(Self {
            bind_addr,
            port,
            frontend_origins,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Parse `PORT`, falling back to the default for zero or non-numeric values
fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(0) => DEFAULT_PORT,
        Ok(port) => port,
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "PORT is not a valid port number, using default");
            DEFAULT_PORT
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
