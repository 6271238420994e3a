//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::policy::REALM;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account with the requested name
    #[error("User not found")]
    UserNotFound,

    /// Account name already registered
    #[error("Account name already exists")]
    AccountNameTaken,

    /// Wrong password for an existing account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Route needs an identity and the request carried none
    #[error("Full authentication is required to access this resource")]
    AuthenticationRequired,

    /// Authenticated, but without the required role (or no rule matched)
    #[error("Access denied: {reason}")]
    AccessDenied { reason: String },

    /// Session not found, expired, or token signature invalid
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNotFound
            | AuthError::InvalidCredentials
            | AuthError::AuthenticationRequired
            | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            AuthError::AccountNameTaken => StatusCode::CONFLICT,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound
            | AuthError::InvalidCredentials
            | AuthError::AuthenticationRequired
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AccessDenied { .. } => ErrorKind::Forbidden,
            AuthError::AccountNameTaken => ErrorKind::Conflict,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Every 401 carries a Basic challenge. Unknown user and wrong password
    /// render the same message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                AppError::unauthorized("Bad credentials").with_challenge(challenge())
            }
            AuthError::AuthenticationRequired | AuthError::SessionInvalid => {
                AppError::new(self.kind(), self.to_string()).with_challenge(challenge())
            }
            AuthError::AccountNameTaken => AppError::conflict(self.to_string())
                .with_action("Please choose a different name"),
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            AuthError::AccessDenied { .. } => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) | AuthError::PasswordHash(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials | AuthError::UserNotFound => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccessDenied { reason } => {
                tracing::info!(reason = %reason, "Access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

fn challenge() -> String {
    platform::basic::challenge(REALM)
}

/// By value, database errors are classified by the kernel (pool timeouts
/// and unreachable servers become 503). Everything else renders as
/// [`AuthError::to_app_error`].
impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::PasswordHash(err.to_string())
    }
}
