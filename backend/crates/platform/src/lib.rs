//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted PHC strings, optional pepper)
//! - Signed session tokens (HMAC-SHA256)
//! - Cookie handling
//! - HTTP Basic credential parsing

pub mod basic;
pub mod cookie;
pub mod crypto;
pub mod password;
