//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::InventoryClientConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub demo: DemoConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inventory backend the dashboard talks to
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_request_timeout() -> u64 {
    5000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl BackendConfig {
    pub fn client_config(&self) -> InventoryClientConfig {
        InventoryClientConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Dashboard HTTP server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Demo announcement
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub repository_url: String,
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

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
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

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("inventory-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/inventory-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `INVENTORY_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("INVENTORY_API_URL") {
            self.backend.base_url = url;
        }

        if let Some(host) = lookup("INVENTORY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("INVENTORY_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid INVENTORY_PORT {:?}", port),
            }
        }

        if let Some(demo) = lookup("INVENTORY_DEMO") {
            self.demo.enabled = matches!(
                demo.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(level) = lookup("INVENTORY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("INVENTORY_LOG_FORMAT") {
            self.logging.format = format;
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
    r#"# Inventory Dashboard Configuration
#
# Environment variables override these settings:
# - INVENTORY_API_URL
# - INVENTORY_HOST
# - INVENTORY_PORT
# - INVENTORY_DEMO
# - INVENTORY_LOG_LEVEL
# - INVENTORY_LOG_FORMAT

[backend]
# Base URL of the inventory REST API
base_url = "http://localhost:8080/api"

# Per-request timeout (ms); slower answers count as unreachable
request_timeout_ms = 5000

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8084

[demo]
# Announce demo mode when the dashboard opens
enabled = false

# Repository linked from the demo notice
repository_url = ""

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8080/api");
        assert_eq!(config.backend.request_timeout_ms, 5000);
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert!(!config.demo.enabled);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let file = write_config(&generate_default_config());
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.backend.base_url, default_base_url());
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.logging.level, "info");
        assert!(config.demo.repository_url.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
[backend]
base_url = "http://inventory:9000/api"

[demo]
enabled = true
repository_url = "https://example.com/inventory"
"#,
        );
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.backend.base_url, "http://inventory:9000/api");
        assert_eq!(config.backend.request_timeout_ms, 5000);
        assert_eq!(config.server.port, 8084);
        assert!(config.demo.enabled);
        assert_eq!(config.demo.repository_url, "https://example.com/inventory");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/inventory/config.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let file = write_config("[server]\nport = \"not a port\"\n");
        let invalid = Config::load(file.path());
        assert!(matches!(invalid, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("INVENTORY_API_URL", "http://10.0.0.5:8080/api"),
            ("INVENTORY_PORT", "9090"),
            ("INVENTORY_DEMO", "true"),
            ("INVENTORY_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.base_url, "http://10.0.0.5:8080/api");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.demo.enabled);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "INVENTORY_PORT").then(|| "eighty".to_string()));
        assert_eq!(config.server.port, 8084);
    }
}
