//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::authenticate::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserAccountRepository};
use crate::error::AuthResult;

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub account_name: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserAccountRepository + AuthSessionRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserAccountRepository + AuthSessionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let principal = AuthenticateUseCase::new(self.repo.clone(), self.config.clone())
            .execute(&input.username, input.password)
            .await?;

        let session = AuthSession::new(principal.name.clone(), self.config.session_ttl_chrono()?);
        self.repo.create(&session).await?;

        let session_token = platform::crypto::sign_token(
            &self.config.session_secret,
            &session.session_id.to_string(),
        );

        tracing::info!(
            account_name = %principal.name,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            account_name: principal.name,
        })
    }
}
