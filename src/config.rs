//! Client and server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so `ClientConfig` is baked in
//! at build time from `PAYBORD_*` variables with defaults. The SSR binary
//! reads `ServerConfig` from the process environment after `dotenvy` has
//! loaded `.env`; Leptos' own options still come from
//! `[package.metadata.leptos]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_PAGE_SIZE: usize = crate::list_view::DEFAULT_PAGE_SIZE;
pub const DEFAULT_REFRESH_POLL_MS: u64 = 2_000;
pub const DEFAULT_TOAST_TTL_MS: u64 = 4_000;
pub const DEFAULT_MAX_TOASTS: usize = 4;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST call, without trailing slash.
    pub api_base: String,
    pub page_size: usize,
    /// Interval of the cross-tab refresh beacon poll.
    pub refresh_poll_ms: u64,
    pub toast_ttl_ms: u64,
    pub max_toasts: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            refresh_poll_ms: DEFAULT_REFRESH_POLL_MS,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            max_toasts: DEFAULT_MAX_TOASTS,
        }
    }
}

impl ClientConfig {
    /// Configuration compiled into this build.
    ///
    /// Optional build-time variables:
    /// - `PAYBORD_API_BASE`: default `/api`
    /// - `PAYBORD_PAGE_SIZE`: default 10
    /// - `PAYBORD_REFRESH_POLL_MS`: default 2000
    /// - `PAYBORD_TOAST_TTL_MS`: default 4000
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "PAYBORD_API_BASE" => option_env!("PAYBORD_API_BASE"),
                "PAYBORD_PAGE_SIZE" => option_env!("PAYBORD_PAGE_SIZE"),
                "PAYBORD_REFRESH_POLL_MS" => option_env!("PAYBORD_REFRESH_POLL_MS"),
                "PAYBORD_TOAST_TTL_MS" => option_env!("PAYBORD_TOAST_TTL_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// defaults; a misconfigured build should still render.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_base = lookup("PAYBORD_API_BASE")
            .map(|raw| normalize_base(&raw))
            .unwrap_or(defaults.api_base);
        Self {
            api_base,
            page_size: parse_or(lookup("PAYBORD_PAGE_SIZE"), defaults.page_size).max(1),
            refresh_poll_ms: parse_or(lookup("PAYBORD_REFRESH_POLL_MS"), defaults.refresh_poll_ms).max(250),
            toast_ttl_ms: parse_or(lookup("PAYBORD_TOAST_TTL_MS"), defaults.toast_ttl_ms),
            max_toasts: defaults.max_toasts,
        }
    }

    /// Join the API base with an endpoint path such as `/auth/login`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { String::new() } else { trimmed.to_owned() }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

// =============================================================================
// SERVER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address override; `None` keeps Leptos' `site-addr`.
    pub addr: Option<SocketAddr>,
    /// Mount the in-memory demo API under `/api`.
    pub demo_api: bool,
}

impl ServerConfig {
    /// Read server settings from the process environment.
    ///
    /// Optional:
    /// - `PAYBORD_ADDR`: full `host:port` bind address
    /// - `PORT`: port on `0.0.0.0` (ignored when `PAYBORD_ADDR` is set)
    /// - `PAYBORD_DEMO_API`: `true` (default) or `false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unparseable address, port, or
    /// boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = match (lookup("PAYBORD_ADDR"), lookup("PORT")) {
            (Some(raw), _) => Some(
                raw.trim()
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::Invalid { var: "PAYBORD_ADDR", value: raw.clone() })?,
            ),
            (None, Some(raw)) => {
                let port = raw
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?;
                Some(SocketAddr::from(([0, 0, 0, 0], port)))
            }
            (None, None) => None,
        };
        let demo_api = match lookup("PAYBORD_DEMO_API") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "PAYBORD_DEMO_API", value: raw })?,
        };
        Ok(Self { addr, demo_api })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
