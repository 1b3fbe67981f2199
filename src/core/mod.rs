//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Heroes, pages and the response envelope
//! - **catalog**: Paginated, searchable hero store
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use catalog::HeroRepository;
pub use config::Config;
pub use error::{BorutoError, Result};
pub use services::Services;
