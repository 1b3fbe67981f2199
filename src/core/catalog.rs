//! Hero catalog store
//!
//! Holds the fixed, ordered collection of heroes partitioned into
//! fixed-size pages at construction. Lookups and searches are pure
//! in-memory operations; the store is never mutated after it is
//! built and can be shared freely across request handlers.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::error::{BorutoError, Result};
use crate::core::types::{Hero, HeroPage};

/// Reference data set compiled into the binary
const BUNDLED_HEROES: &str = include_str!("../../data/heroes.json");

/// Read-only hero catalog split into 1-indexed pages
#[derive(Debug, Clone)]
pub struct HeroRepository {
    pages: Vec<Vec<Hero>>,
    page_size: usize,
    len: usize,
}

impl HeroRepository {
    /// Partition `heroes` into pages of `page_size`, preserving order
    ///
    /// The last page is shorter when the catalog size is not a
    /// multiple of the page size.
    ///
    /// # Errors
    ///
    /// - `ConfigError`: zero page size or duplicate hero ids
    pub fn new(heroes: Vec<Hero>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(BorutoError::ConfigError(
                "Page size must be non-zero".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(heroes.len());
        for hero in &heroes {
            if !seen.insert(hero.id) {
                return Err(BorutoError::ConfigError(format!(
                    "Duplicate hero id {} ({})",
                    hero.id, hero.name
                )));
            }
        }

        let len = heroes.len();
        let pages = heroes
            .chunks(page_size)
            .map(|chunk| chunk.to_vec())
            .collect();

        Ok(Self {
            pages,
            page_size,
            len,
        })
    }

    /// Build the catalog from the data set shipped with the binary
    pub fn bundled(page_size: usize) -> Result<Self> {
        Self::from_json(BUNDLED_HEROES, page_size)
    }

    /// Build the catalog from a JSON array of heroes on disk
    pub fn from_file(path: impl AsRef<Path>, page_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BorutoError::ConfigError(format!(
                "Failed to read hero data {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&contents, page_size)
    }

    fn from_json(json: &str, page_size: usize) -> Result<Self> {
        let heroes: Vec<Hero> = serde_json::from_str(json)?;
        Self::new(heroes, page_size)
    }

    /// Look up one page and derive its neighbor pointers
    ///
    /// # Errors
    ///
    /// - `PageOutOfRange`: `page` is outside `1..=page_count()`
    pub fn get_page(&self, page: i32) -> Result<HeroPage> {
        let page_count = self.page_count();
        let index = usize::try_from(page)
            .ok()
            .filter(|p| (1..=page_count).contains(p))
            .ok_or(BorutoError::PageOutOfRange { page, page_count })?;

        Ok(HeroPage {
            page,
            prev_page: (index > 1).then(|| page - 1),
            next_page: (index < page_count).then(|| page + 1),
            heroes: self.pages[index - 1].clone(),
        })
    }

    /// Heroes whose name contains `query`, ignoring case
    ///
    /// An empty query matches nothing. Results keep catalog order.
    pub fn search(&self, query: &str) -> Vec<Hero> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.heroes()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// All heroes in catalog order
    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.pages.iter().flatten()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
