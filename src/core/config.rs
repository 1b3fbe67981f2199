//! Configuration management for the Boruto heroes API.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{BorutoError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Heroes per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// JSON hero data replacing the bundled catalog
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_page_size() -> usize {
    5
}

fn default_log_filter() -> String {
    "boruto=info,tower_http=debug".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            data_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BorutoError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. `path`, when given
    /// 2. BORUTO_CONFIG env var
    /// 3. XDG config file (~/.config/boruto/config.toml)
    /// 4. ./boruto.toml
    /// 5. Defaults
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(Self::locate_file);
        let mut config = match file {
            Some(path) => {
                tracing::debug!("Reading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    fn locate_file() -> Option<PathBuf> {
        if let Ok(path) = env::var("BORUTO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        if let Some(xdg) = xdg_config_file() {
            if xdg.exists() {
                return Some(xdg);
            }
        }

        let local = PathBuf::from("boruto.toml");
        local.exists().then_some(local)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("BORUTO_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("BORUTO_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(page_size) = env::var("BORUTO_PAGE_SIZE") {
            if let Ok(size) = page_size.parse() {
                self.catalog.page_size = size;
            }
        }
        if let Ok(data_file) = env::var("BORUTO_DATA_FILE") {
            self.catalog.data_file = Some(PathBuf::from(data_file));
        }

        if let Ok(format) = env::var("BORUTO_LOG_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "json" => self.logging.format = LogFormat::Json,
                "text" => self.logging.format = LogFormat::Text,
                _ => {}
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(BorutoError::ConfigError(
                "Server host must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(BorutoError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        if self.catalog.page_size == 0 {
            return Err(BorutoError::ConfigError(
                "Page size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.bind_addr());
        tracing::info!("  Page size: {}", self.catalog.page_size);
        match &self.catalog.data_file {
            Some(path) => tracing::info!("  Hero data: {:?}", path),
            None => tracing::info!("  Hero data: bundled"),
        }
        tracing::info!("  Log format: {:?}", self.logging.format);
    }
}

/// `$XDG_CONFIG_HOME/boruto/config.toml`
pub fn xdg_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("boruto").join("config.toml"))
}
