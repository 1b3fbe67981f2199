//! Command-line arguments for the server binary
//!
//! Flags take precedence over environment variables, which take
//! precedence over the TOML file.

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::{Config, LogFormat};
use crate::core::error::Result;

/// Boruto heroes API server
///
/// Serves a static hero catalog as paginated, searchable JSON.
#[derive(Parser, Debug, Default)]
#[command(name = "boruto-server")]
#[command(version)]
#[command(about = "Paginated Boruto heroes API", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the XDG config or ./boruto.toml)
    #[arg(short, long, env = "BORUTO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Heroes per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Resolve the effective configuration
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_from(self.config.as_deref())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overlay explicitly passed flags onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(page_size) = self.page_size {
            config.catalog.page_size = page_size;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}
