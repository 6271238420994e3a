//! Authenticate Use Case
//!
//! Checks a name/password pair and yields the principal on success.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::load_principal::LoadPrincipalUseCase;
use crate::domain::entity::principal::Principal;
use crate::domain::repository::UserAccountRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

pub struct AuthenticateUseCase<R>
where
    R: UserAccountRepository,
{
    load_principal: LoadPrincipalUseCase<R>,
    config: Arc<AuthConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserAccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            load_principal: LoadPrincipalUseCase::new(repo),
            config,
        }
    }

    pub async fn execute(&self, name: &str, password: String) -> AuthResult<Principal> {
        let raw_password = RawPassword::new(password);

        let principal = match self.load_principal.execute(name).await {
            Ok(principal) => principal,
            Err(AuthError::UserNotFound) => {
                UserPassword::verify_against_dummy(&raw_password, self.config.pepper());
                return Err(AuthError::UserNotFound);
            }
            Err(e) => return Err(e),
        };

        if !principal
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        if principal.password_hash.needs_rehash() {
            tracing::warn!(account_name = %principal.name, "Stored password hash uses an outdated algorithm");
        }

        Ok(principal)
    }
}
