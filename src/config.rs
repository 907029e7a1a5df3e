//! Host-server configuration from the environment.
//!
//! DESIGN
//! ======
//! Only the listen address is configured here. Leptos build settings (site
//! root, pkg dir, output name) come from `cargo-leptos` via
//! `leptos::config::get_configuration`.
//!
//! The address is layered: `HOST` / `PORT` win, then `LEPTOS_SITE_ADDR`
//! (exported by cargo-leptos from `site-addr`), then `0.0.0.0:8080`. Port
//! 3000 is left to the AMC API the client posts to.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Error returned by [`Config::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but does not parse as the expected type.
    #[error("invalid {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Listen address for the host server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `LEPTOS_SITE_ADDR`, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_keys("LEPTOS_SITE_ADDR", "HOST", "PORT")
    }

    fn from_keys(site_key: &str, host_key: &str, port_key: &str) -> Result<Self, ConfigError> {
        let site = env_or(site_key, Self::default().addr())?;
        Ok(Self {
            host: env_or(host_key, site.ip())?,
            port: env_or(port_key, site.port())?,
        })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse `key` if set and non-blank, else return `default`.
fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key: key.to_owned(),
            value: raw,
        }),
        _ => Ok(default),
    }
}
