//! Load Principal Use Case
//!
//! Resolves an account name to the principal used for authorization.

use std::sync::Arc;

use crate::domain::entity::principal::Principal;
use crate::domain::repository::UserAccountRepository;
use crate::error::{AuthError, AuthResult};

pub struct LoadPrincipalUseCase<R>
where
    R: UserAccountRepository,
{
    repo: Arc<R>,
}

impl<R> LoadPrincipalUseCase<R>
where
    R: UserAccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Exact, case-sensitive lookup. An unknown name is `UserNotFound`.
    pub async fn execute(&self, name: &str) -> AuthResult<Principal> {
        self.repo
            .find_by_name(name)
            .await?
            .map(Principal::from)
            .ok_or(AuthError::UserNotFound)
    }
}
