//! HTTP REST adapter
//!
//! Depends only on core/. Provides the hero listing and search
//! endpoints via the Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::build_router;
