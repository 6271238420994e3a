//! Presentation Layer
//!
//! HTTP handlers and DTOs for the product endpoints.

pub mod dto;
pub mod handlers;
pub mod router;
