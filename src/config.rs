//! Server configuration from the environment

use crate::runtime::RuntimeConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub runtime: RuntimeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall
    /// back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind: parse_or(&lookup, "WIDGET_PREVIEW_BIND", defaults.bind),
            port: parse_or(&lookup, "WIDGET_PREVIEW_PORT", defaults.port),
            runtime: RuntimeConfig {
                max_sessions: parse_or(
                    &lookup,
                    "WIDGET_PREVIEW_MAX_SESSIONS",
                    defaults.runtime.max_sessions,
                ),
                event_buffer: parse_or(
                    &lookup,
                    "WIDGET_PREVIEW_EVENT_BUFFER",
                    defaults.runtime.event_buffer,
                ),
                idle_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "WIDGET_PREVIEW_IDLE_TIMEOUT_SECS",
                    defaults.runtime.idle_timeout.as_secs(),
                )),
            },
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse_or<T: std::str::FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring invalid configuration value");
            default
        }),
    }
}
