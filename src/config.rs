//! Console configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup function so tests can feed a plain map
//! instead of mutating the process environment. `main` calls
//! [`ConsoleConfig::from_env`] once; the result lives in `AppState`.

use std::path::PathBuf;

use crate::guard::PublicRouteMatch;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEB_DIR: &str = "web/dist";
pub const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 86_400;
pub const DEFAULT_API_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL of the remote attendance API, without a trailing slash.
    pub api_base_url: String,
    pub port: u16,
    pub web_dir: PathBuf,
    pub cookie_secure: bool,
    pub session_max_age_secs: i64,
    pub timeouts: ApiTimeouts,
    pub public_route_match: PublicRouteMatch,
}

impl ConsoleConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `API_BASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONSOLE_WEB_DIR`: default `web/dist`
    /// - `COOKIE_SECURE`: inferred from `PUBLIC_ORIGIN` when absent
    /// - `SESSION_MAX_AGE_SECS`: default 86400
    /// - `API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `API_CONNECT_TIMEOUT_SECS`: default 10
    /// - `PUBLIC_ROUTE_MATCH`: `segment` (default) or `prefix`
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is missing or any value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ConsoleConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|raw| !raw.is_empty())
            .ok_or(ConfigError::Missing("API_BASE_URL"))?;
        if reqwest::Url::parse(&api_base_url).is_err() {
            return Err(ConfigError::Invalid { var: "API_BASE_URL", value: api_base_url });
        }

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let web_dir = lookup("CONSOLE_WEB_DIR").map_or_else(|| PathBuf::from(DEFAULT_WEB_DIR), PathBuf::from);

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => lookup("PUBLIC_ORIGIN").is_some_and(|origin| origin.starts_with("https://")),
        };

        let session_max_age_secs = parse_or(&lookup, "SESSION_MAX_AGE_SECS", DEFAULT_SESSION_MAX_AGE_SECS)?;
        if session_max_age_secs <= 0 {
            return Err(ConfigError::Invalid {
                var: "SESSION_MAX_AGE_SECS",
                value: session_max_age_secs.to_string(),
            });
        }

        let timeouts = ApiTimeouts {
            request_secs: parse_or(&lookup, "API_REQUEST_TIMEOUT_SECS", DEFAULT_API_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_or(&lookup, "API_CONNECT_TIMEOUT_SECS", DEFAULT_API_CONNECT_TIMEOUT_SECS)?,
        };

        let public_route_match = match lookup("PUBLIC_ROUTE_MATCH") {
            None => PublicRouteMatch::Segment,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "segment" => PublicRouteMatch::Segment,
                "prefix" => PublicRouteMatch::Prefix,
                _ => return Err(ConfigError::Invalid { var: "PUBLIC_ROUTE_MATCH", value: raw }),
            },
        };

        Ok(Self {
            api_base_url,
            port,
            web_dir,
            cookie_secure,
            session_max_age_secs,
            timeouts,
            public_route_match,
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
