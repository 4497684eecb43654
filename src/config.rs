//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::http::HttpBackendConfig;
use crate::query::TrendGranularity;
use crate::views::RefreshPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub views: ViewsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl BackendConfig {
    /// Settings for the HTTP backend client
    pub fn http(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// View behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewsConfig {
    #[serde(default)]
    pub trend_granularity: TrendGranularity,

    #[serde(default)]
    pub refresh: RefreshPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load an explicit file with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<ConfigSearch, ConfigError> {
        let mut config = Self::load(path)?;
        let ignored = config.apply_env_overrides();
        Ok(ConfigSearch {
            config,
            source: Some(path.to_path_buf()),
            failures: Vec::new(),
            ignored,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> ConfigSearch {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("health-hub").join("config.toml")),
            Some(PathBuf::from("./health-hub.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::search(&config_paths, |key| std::env::var(key).ok())
    }

    /// First readable file among `paths`, then overrides from `lookup`.
    ///
    /// Files that exist but fail to load are skipped and recorded.
    fn search<F>(paths: &[PathBuf], lookup: F) -> ConfigSearch
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut failures = Vec::new();
        let mut found = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    found = Some((config, path.clone()));
                    break;
                }
                Err(e) => failures.push(e),
            }
        }

        let (mut config, source) = match found {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        let ignored = config.apply_overrides(lookup);

        ConfigSearch {
            config,
            source,
            failures,
            ignored,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup, returning the ones ignored
    fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        // Backend overrides
        if let Some(url) = lookup("HEALTH_HUB_API_URL") {
            self.backend.base_url = url;
        }
        if let Some(timeout) = lookup("HEALTH_HUB_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.backend.request_timeout_secs = secs,
                Err(_) => ignored.push(format!("Invalid HEALTH_HUB_TIMEOUT_SECS: {}", timeout)),
            }
        }

        // View overrides
        if let Some(granularity) = lookup("HEALTH_HUB_TREND_GRANULARITY") {
            match granularity.parse() {
                Ok(g) => self.views.trend_granularity = g,
                Err(e) => ignored.push(format!("HEALTH_HUB_TREND_GRANULARITY: {}", e)),
            }
        }
        if let Some(refresh) = lookup("HEALTH_HUB_REFRESH") {
            match refresh.parse() {
                Ok(r) => self.views.refresh = r,
                Err(e) => ignored.push(format!("HEALTH_HUB_REFRESH: {}", e)),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("HEALTH_HUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HEALTH_HUB_LOG_FORMAT") {
            self.logging.format = format;
        }

        ignored
    }
}

/// Where a configuration came from and what was skipped on the way.
///
/// Loading happens before logging is set up (the log settings live in the
/// config), so nothing is logged here. Call [`report`](Self::report) once
/// the subscriber is installed.
#[derive(Debug)]
pub struct ConfigSearch {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub failures: Vec<ConfigError>,
    /// Environment overrides with unusable values
    pub ignored: Vec<String>,
}

impl ConfigSearch {
    /// Log the outcome of the search
    pub fn report(&self) {
        for failure in &self.failures {
            tracing::warn!("Skipped config: {}", failure);
        }
        for ignored in &self.ignored {
            tracing::warn!("Ignoring override {}", ignored);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Health Hub Configuration
#
# Environment variables override these settings:
# - HEALTH_HUB_API_URL
# - HEALTH_HUB_TIMEOUT_SECS
# - HEALTH_HUB_TREND_GRANULARITY
# - HEALTH_HUB_REFRESH
# - HEALTH_HUB_LOG_LEVEL
# - HEALTH_HUB_LOG_FORMAT

[backend]
# Base URL of the Health Hub REST backend
base_url = "http://localhost:5000"

# Request timeout in seconds
request_timeout_secs = 30

[views]
# Enrollment trend buckets: month (Jan, Feb, ...) or year-month (2024-01)
trend_granularity = "month"

# After creating a record: refetch the list, or optimistic (append locally)
refresh = "refetch"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
