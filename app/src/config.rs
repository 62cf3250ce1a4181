use std::time::Duration;

use config::{Config as ConfigBuilder, File};
use serde::Deserialize;

use crate::normalize::certificate::DEFAULT_REGION;

/// Three days, the lifetime of cached TMDB responses by default.
const DEFAULT_CACHE_TTL_SECS: u64 = 3 * 24 * 60 * 60;
/// Upper bound on cached TMDB responses.
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub port: u16,
    pub default_region: String,
    pub default_language: String,
    pub cache_ttl_secs: u64,
    pub cache_capacity: u64,
}

impl Config {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let file = ConfigBuilder::builder()
            .add_source(File::with_name("config").required(false))
            .set_default("port", DEFAULT_PORT)?
            .set_default("default_region", DEFAULT_REGION)?
            .set_default("default_language", DEFAULT_LANGUAGE)?
            .set_default("cache_ttl_secs", DEFAULT_CACHE_TTL_SECS)?
            .set_default("cache_capacity", DEFAULT_CACHE_CAPACITY)?
            .build()?;

        Self::resolve(|name| std::env::var(name).ok(), |key| file.get_string(key).ok())
    }

    /// Build from environment lookups first and config file values second.
    pub fn resolve<E, F>(env: E, file: F) -> anyhow::Result<Self>
    where
        E: Fn(&str) -> Option<String>,
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |env_name: &str, key: &str| {
            env(env_name)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| file(key))
        };

        let api_url = lookup("API_URL", "api_url")
            .ok_or_else(|| anyhow::anyhow!("API_URL must be provided"))?;
        let api_key = lookup("API_SECRET", "api_key")
            .or_else(|| env("TMDB_API_KEY").filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| anyhow::anyhow!("API_SECRET or TMDB_API_KEY must be provided"))?;

        Ok(Config {
            api_url,
            api_key,
            port: lookup("PORT", "port")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            default_region: lookup("DEFAULT_REGION", "default_region")
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            default_language: lookup("DEFAULT_LANGUAGE", "default_language")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            cache_ttl_secs: lookup("CACHE_TTL_SECS", "cache_ttl_secs")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            cache_capacity: lookup("CACHE_CAPACITY", "cache_capacity")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
        })
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
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
    fn test_defaults_apply() {
        let config = Config::resolve(
            lookup(&[("API_URL", "https://api.themoviedb.org/3"), ("API_SECRET", "token")]),
            lookup(&[]),
        )
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.default_region, "US");
        assert_eq!(config.default_language, "en-US");
        assert_eq!(config.cache_ttl(), Duration::from_secs(259_200));
        assert_eq!(config.cache_capacity, 10_000);
    }

    #[test]
    fn test_missing_api_url_fails() {
        let err = Config::resolve(lookup(&[("API_SECRET", "token")]), lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("API_URL"));
    }

    #[test]
    fn test_missing_key_fails() {
        let err = Config::resolve(lookup(&[("API_URL", "http://x")]), lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("API_SECRET"));
    }

    #[test]
    fn test_tmdb_api_key_is_accepted() {
        let config = Config::resolve(
            lookup(&[("API_URL", "http://x"), ("TMDB_API_KEY", "abc")]),
            lookup(&[]),
        )
        .unwrap();
        assert_eq!(config.api_key, "abc");
    }

    #[test]
    fn test_env_wins_over_file() {
        let config = Config::resolve(
            lookup(&[("API_URL", "http://env"), ("API_SECRET", "k"), ("PORT", "8080")]),
            lookup(&[
                ("api_url", "http://file"),
                ("port", "9000"),
                ("default_region", "GB"),
                ("cache_capacity", "500"),
            ]),
        )
        .unwrap();
        assert_eq!(config.cache_capacity, 500);
        assert_eq!(config.api_url, "http://env");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_region, "GB");
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let err = Config::resolve(lookup(&[("API_URL", " "), ("API_SECRET", "k")]), lookup(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("API_URL"));
    }
}
