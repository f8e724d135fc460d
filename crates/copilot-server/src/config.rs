//! Server configuration
//!
//! Settings come from an optional JSON file and are then overridden by
//! environment variables. A missing file is not an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snippet_engine::{CatalogError, SnippetCatalog};
use tokio::fs;

use crate::constants::{defaults, env, hosts, ports};

/// Full server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind (0 picks a free port)
    pub port: u16,
    /// Simulated latency before each generation, 0 disables it
    pub response_delay_ms: u64,
    /// JSON catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: hosts::LOCAL.to_string(),
            port: ports::SERVER,
            response_delay_ms: defaults::RESPONSE_DELAY_MS,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file, falling back to defaults if absent
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).await.map_err(ConfigError::Io)?;

        serde_json::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Resolve the config file from the environment, load it, apply overrides
    pub async fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(env::CONFIG)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::CONFIG_FILE));

        let config = Self::load(&path).await?;
        config.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(env::HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(env::PORT) {
            self.port = parse_var(env::PORT, &port)?;
        }
        if let Some(delay) = lookup(env::DELAY_MS) {
            self.response_delay_ms = parse_var(env::DELAY_MS, &delay)?;
        }
        if let Some(path) = lookup(env::CATALOG) {
            self.catalog_path = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Load the configured catalog, or share the built-in one
    pub async fn load_catalog(&self) -> Result<Arc<SnippetCatalog>, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Arc::new(SnippetCatalog::builtin().clone()));
        };

        let contents = fs::read_to_string(path).await.map_err(ConfigError::Io)?;
        let catalog = SnippetCatalog::from_json_str(&contents)?;
        log::info!(
            "Loaded snippet catalog from {:?} ({} languages)",
            path,
            catalog.len()
        );
        Ok(Arc::new(catalog))
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(serde_json::Error),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("Invalid snippet catalog: {0}")]
    Catalog(#[from] CatalogError),
}
