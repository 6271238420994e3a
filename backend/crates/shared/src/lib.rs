//! Shared Kernel
//!
//! Vocabulary shared by the catalog and auth crates:
//! - The unified [`error::app_error::AppError`] and its HTTP mapping
//! - Typed integer identifiers for store-assigned and catalog-assigned ids

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
