//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and policy middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{PolicyState, enforce_policy};
pub use router::auth_router;
