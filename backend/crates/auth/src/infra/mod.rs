//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL and in-memory.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAuthRepository;
pub use postgres::PgAuthRepository;
