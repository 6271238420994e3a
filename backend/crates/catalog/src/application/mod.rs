//! Application Layer

pub mod catalog;
pub mod config;

pub use catalog::Catalog;
pub use config::CatalogConfig;
