//! Product Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity
//! - `application/` - Catalog snapshot and its configuration
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! The catalog is generated once at startup and never changes afterwards.
//! It is shared through request state as `Arc<Catalog>`.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::catalog::Catalog;
pub use application::config::CatalogConfig;
pub use domain::product::Product;
pub use error::{CatalogError, CatalogResult};
pub use presentation::router::catalog_router;
