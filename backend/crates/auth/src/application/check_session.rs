//! Check Session Use Case
//!
//! Verifies a session cookie and reloads the principal it belongs to.

use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::load_principal::LoadPrincipalUseCase;
use crate::domain::entity::principal::Principal;
use crate::domain::repository::{AuthSessionRepository, UserAccountRepository};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<R>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CheckSessionUseCase<R>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Resolve a session token to its principal.
    ///
    /// Expired sessions are deleted. A session whose account no longer
    /// exists is invalid.
    pub async fn execute(&self, session_token: &str) -> AuthResult<Principal> {
        let session_id = parse_session_token(&self.config, session_token)?;

        let mut session = self
            .repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let principal = LoadPrincipalUseCase::new(self.repo.clone())
            .execute(&session.account_name)
            .await
            .map_err(|e| match e {
                AuthError::UserNotFound => AuthError::SessionInvalid,
                other => other,
            })?;

        // Update last activity in background
        session.touch();
        let repo = self.repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(principal)
    }
}

/// Verify the token signature and extract the session id
pub(crate) fn parse_session_token(config: &AuthConfig, token: &str) -> AuthResult<Uuid> {
    platform::crypto::verify_token(&config.session_secret, token)
        .ok_or(AuthError::SessionInvalid)?
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::domain::entity::auth_session::AuthSession;
    use crate::infra::memory::InMemoryAuthRepository;

    async fn setup() -> (Arc<InMemoryAuthRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                name: "user".to_string(),
                email: String::new(),
                password: "pw".to_string(),
                roles: "ROLE_USER".to_string(),
            })
            .await
            .unwrap();
        (repo, config)
    }

    async fn token_for(
        repo: &InMemoryAuthRepository,
        config: &AuthConfig,
        session: AuthSession,
    ) -> String {
        repo.create(&session).await.unwrap();
        platform::crypto::sign_token(&config.session_secret, &session.session_id.to_string())
    }

    #[tokio::test]
    async fn valid_session_yields_principal() {
        let (repo, config) = setup().await;
        let session = AuthSession::new("user", chrono::Duration::hours(1));
        let token = token_for(&repo, &config, session).await;

        let principal = CheckSessionUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap();
        assert_eq!(principal.name, "user");
        assert_eq!(principal.roles.len(), 1);
    }

    #[tokio::test]
    async fn expired_session_is_deleted() {
        let (repo, config) = setup().await;
        let session = AuthSession::new("user", chrono::Duration::seconds(-5));
        let token = token_for(&repo, &config, session).await;

        let result = CheckSessionUseCase::new(repo.clone(), config)
            .execute(&token)
            .await;
        assert!(matches!(result, Err(AuthError::SessionInvalid)));
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn session_for_missing_account_is_invalid() {
        let (repo, config) = setup().await;
        let session = AuthSession::new("ghost", chrono::Duration::hours(1));
        let token = token_for(&repo, &config, session).await;

        let result = CheckSessionUseCase::new(repo, config).execute(&token).await;
        assert!(matches!(result, Err(AuthError::SessionInvalid)));
    }

    #[tokio::test]
    async fn unknown_or_malformed_tokens() {
        let (repo, config) = setup().await;
        let use_case = CheckSessionUseCase::new(repo, config.clone());

        let unknown =
            platform::crypto::sign_token(&config.session_secret, &Uuid::new_v4().to_string());
        assert!(matches!(
            use_case.execute(&unknown).await,
            Err(AuthError::SessionInvalid)
        ));

        let not_uuid = platform::crypto::sign_token(&config.session_secret, "not-a-uuid");
        assert!(matches!(
            use_case.execute(&not_uuid).await,
            Err(AuthError::SessionInvalid)
        ));

        assert!(matches!(
            use_case.execute("garbage").await,
            Err(AuthError::SessionInvalid)
        ));
    }
}
