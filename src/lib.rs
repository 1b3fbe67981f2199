//! Boruto - paginated heroes API
//!
//! Serves a fixed catalog of Boruto characters over HTTP, split
//! into fixed-size pages and searchable by name.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - catalog (page lookup, name search)
//!   - services (shared service container)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, router, middleware, error mapping
//!
//! - **cli** / **logging**: binary wiring

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

pub mod cli;
pub mod logging;

// Re-export commonly used types for convenience
pub use crate::core::catalog::HeroRepository;
pub use crate::core::config::Config;
pub use crate::core::error::{BorutoError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
