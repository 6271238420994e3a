//! API DTOs (Data Transfer Objects)

use serde::Deserialize;
use std::fmt;

// ============================================================================
// Registration
// ============================================================================

/// Registration request (`POST /products/new`)
#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
    /// Comma-separated role tokens
    #[serde(default)]
    pub roles: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("roles", &self.roles)
            .finish()
    }
}

/// Plain-text body returned after a successful registration
pub const USER_ADDED: &str = "user added to the system";

// ============================================================================
// Login
// ============================================================================

/// Login request, form-encoded or JSON
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
