//! Server configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Only a malformed `PORT` is fatal. Missing mail settings leave delivery
//! disabled (the contact route then answers "not configured" or, in
//! development mode, logs and succeeds). Malformed numeric limits fall back to
//! their defaults.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RECIPIENT_LABEL: &str = "Shelter Housing Ltd.";
pub const DEFAULT_CONTACT_RATE_LIMIT: usize = 5;
pub const DEFAULT_CONTACT_RATE_WINDOW_SECS: u64 = 600;
pub const DEFAULT_CONTACT_GLOBAL_RATE_LIMIT: usize = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

/// Resend credentials and addressing. Present only when all three are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub to: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_CONTACT_RATE_LIMIT,
            global_limit: DEFAULT_CONTACT_GLOBAL_RATE_LIMIT,
            window: Duration::from_secs(DEFAULT_CONTACT_RATE_WINDOW_SECS),
        }
    }
}

/// Everything the contact endpoint needs besides the mailer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub mail: Option<MailConfig>,
    pub recipient_label: String,
    pub dev_mode: bool,
    /// Use the first `X-Forwarded-For` hop as the client address.
    pub trust_forwarded_for: bool,
    pub rate_limit: RateLimitConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            mail: None,
            recipient_label: DEFAULT_RECIPIENT_LABEL.to_owned(),
            dev_mode: false,
            trust_forwarded_for: false,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub contact: ContactConfig,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ASSETS_DIR`: default `<server crate>/../assets`
    /// - `RESEND_API_KEY`, `CONTACT_FROM`, `CONTACT_TO` (comma separated)
    /// - `CONTACT_RECIPIENT_LABEL`: default "Shelter Housing Ltd."
    /// - `CONTACT_DEV_MODE`: boolean, default false
    /// - `TRUST_FORWARDED_FOR`: boolean, default false
    /// - `CONTACT_RATE_LIMIT`: default 5 per client per window
    /// - `CONTACT_RATE_WINDOW_SECS`: default 600
    /// - `CONTACT_GLOBAL_RATE_LIMIT`: default 60 per window
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let assets_dir = non_empty(lookup("SITE_ASSETS_DIR"))
            .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets"), PathBuf::from);

        let mail = match (
            non_empty(lookup("RESEND_API_KEY")),
            non_empty(lookup("CONTACT_FROM")),
            non_empty(lookup("CONTACT_TO")).map(|raw| split_list(&raw)),
        ) {
            (Some(api_key), Some(from), Some(to)) if !to.is_empty() => Some(MailConfig { api_key, from, to }),
            _ => None,
        };

        let rate_limit = RateLimitConfig {
            per_client_limit: parse_or(lookup("CONTACT_RATE_LIMIT"), DEFAULT_CONTACT_RATE_LIMIT),
            global_limit: parse_or(lookup("CONTACT_GLOBAL_RATE_LIMIT"), DEFAULT_CONTACT_GLOBAL_RATE_LIMIT),
            window: Duration::from_secs(parse_or(lookup("CONTACT_RATE_WINDOW_SECS"), DEFAULT_CONTACT_RATE_WINDOW_SECS)),
        };

        let contact = ContactConfig {
            mail,
            recipient_label: non_empty(lookup("CONTACT_RECIPIENT_LABEL"))
                .unwrap_or_else(|| DEFAULT_RECIPIENT_LABEL.to_owned()),
            dev_mode: lookup("CONTACT_DEV_MODE").as_deref().and_then(parse_bool).unwrap_or(false),
            trust_forwarded_for: lookup("TRUST_FORWARDED_FOR").as_deref().and_then(parse_bool).unwrap_or(false),
            rate_limit,
        };

        Ok(Self { port, assets_dir, contact })
    }
}

/// Boolean words accepted in env values. Anything else is `None`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
