//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the
//! authorization policy.

pub mod entity;
pub mod policy;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{AuthSession, NewUserAccount, Principal, UserAccount};
pub use repository::{AuthSessionRepository, UserAccountRepository};
