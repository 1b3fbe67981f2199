//! Core data types for the Boruto heroes API.
//!
//! Heroes, resolved catalog pages and the response envelope shared
//! by every endpoint.

use serde::{Deserialize, Serialize};

/// Message carried by every successful envelope
pub const OK_MESSAGE: &str = "ok";

/// A single character record from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Stable unique identifier
    pub id: u32,

    /// Display name, used as the search key
    pub name: String,

    /// Image path relative to the API host
    pub image: String,

    /// Short biography
    pub about: String,

    pub rating: f64,
    pub power: u32,
    pub month: String,
    pub day: String,

    #[serde(default)]
    pub family: Vec<String>,

    #[serde(default)]
    pub abilities: Vec<String>,

    #[serde(default)]
    pub nature_types: Vec<String>,
}

/// One page of the catalog with its neighbor pointers
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPage {
    /// 1-indexed page number
    pub page: i32,

    /// Previous page, `None` on the first page
    pub prev_page: Option<i32>,

    /// Next page, `None` on the last page
    pub next_page: Option<i32>,

    pub heroes: Vec<Hero>,
}

/// Uniform response envelope
///
/// All five fields are always serialized: pointers as `null` and
/// `heroes` as `[]` when they do not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub prev_page: Option<i32>,
    pub next_page: Option<i32>,
    #[serde(default)]
    pub heroes: Vec<Hero>,
}

impl ApiResponse {
    /// Successful envelope for a catalog page
    pub fn page(page: HeroPage) -> Self {
        Self {
            success: true,
            message: OK_MESSAGE.to_string(),
            prev_page: page.prev_page,
            next_page: page.next_page,
            heroes: page.heroes,
        }
    }

    /// Successful envelope for search results (no pagination)
    pub fn search(heroes: Vec<Hero>) -> Self {
        Self {
            success: true,
            message: OK_MESSAGE.to_string(),
            prev_page: None,
            next_page: None,
            heroes,
        }
    }

    /// Failure envelope with a fixed message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            prev_page: None,
            next_page: None,
            heroes: Vec::new(),
        }
    }
}
