//! Unified service container for the Boruto API
//!
//! Built once at startup and handed to the HTTP adapter as state.

use crate::core::catalog::HeroRepository;
use crate::core::config::Config;
use crate::core::error::Result;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Read-only hero catalog
    pub heroes: Arc<HeroRepository>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Loads the hero catalog from `catalog.data_file` when set,
    /// otherwise from the bundled data set.
    pub fn new(config: &Config) -> Result<Self> {
        let page_size = config.catalog.page_size;
        let heroes = match &config.catalog.data_file {
            Some(path) => HeroRepository::from_file(path, page_size)?,
            None => HeroRepository::bundled(page_size)?,
        };

        tracing::info!(
            heroes = heroes.len(),
            pages = heroes.page_count(),
            page_size = heroes.page_size(),
            "Hero catalog ready"
        );

        Ok(Self {
            heroes: Arc::new(heroes),
        })
    }
}
