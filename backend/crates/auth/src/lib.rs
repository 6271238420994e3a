//! Auth (Authentication and Authorization) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, route policy
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, policy middleware
//!
//! ## Features
//! - Account registration with Argon2id-hashed passwords
//! - HTTP Basic authentication and cookie-based login sessions
//! - Comma-separated role strings mapped to role-gated routes
//! - Ordered, deny-by-default route policy table

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository};
pub use presentation::router::auth_router;

// Convenience re-exports
pub mod policy {
    pub use crate::domain::policy::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
