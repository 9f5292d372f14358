use crate::error::{CatalogError, Result};
use dashmap::DashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Configuration service
///
/// Snapshot of the process environment at construction time. Values can be
/// overridden with [`ConfigService::set`], which is how tests inject settings.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Parse `key` into `T`, falling back to `default` when it is unset.
    ///
    /// # Errors
    /// Returns `CatalogError::Config` when the value is present but malformed.
    pub fn get_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| CatalogError::Config(format!("{key}={raw:?}: {e}"))),
        }
    }
}

/// Typed settings for the catalog service
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub host: String,
    pub port: u16,
    /// Absolute lifetime of a cache entry
    pub cache_ttl: Duration,
    pub cache_max_capacity: u64,
    /// JSON array of products preloaded into the in-memory store
    pub seed_file: Option<PathBuf>,
    /// Only honoured when built with the `sea-orm-db` feature
    pub database_url: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cache_ttl: Duration::from_secs(300),
            cache_max_capacity: 10_000,
            seed_file: None,
            database_url: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();
        let ttl_secs = config.get_or("CACHE_TTL_SECS", defaults.cache_ttl.as_secs())?;

        Ok(Self {
            host: config.get("HOST").unwrap_or(defaults.host),
            port: config.get_or("PORT", defaults.port)?,
            cache_ttl: Duration::from_secs(ttl_secs),
            cache_max_capacity: config.get_or("CACHE_MAX_CAPACITY", defaults.cache_max_capacity)?,
            seed_file: config.get("SEED_FILE").map(PathBuf::from),
            database_url: config.get("DATABASE_URL").filter(|url| !url.is_empty()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
