//! Register Use Case
//!
//! Creates a new user account. The password is hashed here, before the
//! account reaches the store.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user_account::{NewUserAccount, UserAccount};
use crate::domain::repository::UserAccountRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Comma-separated role tokens, stored verbatim
    pub roles: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserAccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserAccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<UserAccount> {
        let raw_password = RawPassword::new(input.password);
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let account = self
            .repo
            .save(NewUserAccount {
                name: input.name,
                email: input.email,
                password_hash,
                roles: input.roles,
            })
            .await?;

        tracing::info!(
            account_id = %account.id,
            account_name = %account.name,
            roles = %account.roles,
            "User registered"
        );

        Ok(account)
    }
}
