//! Host configuration from the process environment.
//!
//! The WASM client has its own compile-time settings (`client::config`); this
//! only decides where the SSR host listens.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl HostConfig {
    /// Read `BIND_ADDR` and `PORT`, falling back to `0.0.0.0:3000`.
    ///
    /// # Errors
    ///
    /// Returns `HostError::InvalidPort` if `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_values(std::env::var("BIND_ADDR").ok(), std::env::var("PORT").ok())
    }

    fn from_values(bind_addr: Option<String>, port: Option<String>) -> Result<Self, HostError> {
        let bind_addr = bind_addr
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let port = match port {
            Some(raw) => raw.trim().parse().map_err(|_| HostError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
