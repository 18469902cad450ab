use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "database.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
    #[error("FRONTEND_URL is not a valid origin: {0}")]
    InvalidFrontendUrl(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Bearer token for the admin inquiry routes. Unset disables them.
    pub admin_token: Option<String>,
    /// Allowed CORS origin. Any origin when unset.
    pub frontend_url: Option<String>,
    /// Built site to serve for every non-API path.
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let frontend_url = get("FRONTEND_URL");
        if let Some(url) = &frontend_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) || url.ends_with('/') {
                return Err(ConfigError::InvalidFrontendUrl(url.clone()));
            }
        }

        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr,
            admin_token: get("ADMIN_TOKEN"),
            frontend_url,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.database_url, "database.db");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert!(config.admin_token.is_none());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("ADMIN_TOKEN", "  "), ("SENTRY_DSN", "")])).unwrap();
        assert!(config.admin_token.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn rejects_bad_bind_addr_and_origin() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
            Err(ConfigError::InvalidBindAddr(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("FRONTEND_URL", "https://example.com/")])),
            Err(ConfigError::InvalidFrontendUrl(_))
        ));
        let config = AppConfig::from_lookup(lookup(&[
            ("FRONTEND_URL", "https://cvs-studywings.example"),
            ("STATIC_DIR", "../frontend/dist"),
        ]))
        .unwrap();
        assert_eq!(config.frontend_url.as_deref(), Some("https://cvs-studywings.example"));
        assert_eq!(config.static_dir, Some(PathBuf::from("../frontend/dist")));
    }
}
