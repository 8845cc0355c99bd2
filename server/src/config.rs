//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Everything is read once at startup into [`AppConfig`]. Optional
//! integrations (media host, mailer) are `None` when any of their variables
//! is missing, and the server runs with that feature disabled.
//!
//! Parsing goes through a lookup function so tests can feed a map instead of
//! mutating the process environment.

#[cfg(test)]
use std::collections::HashMap;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ADMIN_COOKIE_NAME: &str = "admin_session";
pub const DEFAULT_CONTENT_PAGE_LIMIT: u32 = 12;
pub const MAX_CONTENT_PAGE_LIMIT: u32 = 50;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Credentials for the Cloudinary-style media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Resend credentials and addresses for contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub admin_cookie_name: String,
    pub content_page_limit: u32,
    pub media: Option<MediaConfig>,
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `ADMIN_COOKIE_NAME`: default `admin_session`
    /// - `CONTENT_PAGE_LIMIT`: default 12, capped at 50
    /// - `MEDIA_CLOUD_NAME`, `MEDIA_API_KEY`, `MEDIA_API_SECRET`
    /// - `RESEND_API_KEY`, `MAIL_FROM`, `MAIL_TO`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `DATABASE_URL` is missing or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let content_page_limit = parse_or("CONTENT_PAGE_LIMIT", get("CONTENT_PAGE_LIMIT"), DEFAULT_CONTENT_PAGE_LIMIT)?
            .clamp(1, MAX_CONTENT_PAGE_LIMIT);
        let admin_cookie_name = get("ADMIN_COOKIE_NAME").unwrap_or_else(|| DEFAULT_ADMIN_COOKIE_NAME.to_owned());

        let media = match (get("MEDIA_CLOUD_NAME"), get("MEDIA_API_KEY"), get("MEDIA_API_SECRET")) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(MediaConfig { cloud_name, api_key, api_secret }),
            _ => None,
        };
        let mail = match (get("RESEND_API_KEY"), get("MAIL_FROM"), get("MAIL_TO")) {
            (Some(api_key), Some(from), Some(to)) => Some(MailConfig { api_key, from, to }),
            _ => None,
        };

        Ok(Self { database_url, port, db_max_connections, admin_cookie_name, content_page_limit, media, mail })
    }

    /// Build config from a literal map.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    #[cfg(test)]
    pub fn from_map(vars: &HashMap<&str, &str>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()))
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
