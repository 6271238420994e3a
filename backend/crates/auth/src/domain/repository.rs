//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user_account::{NewUserAccount, UserAccount},
};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserAccountRepository: Send)]
pub trait LocalUserAccountRepository {
    /// Find an account by exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<UserAccount>>;

    /// Persist a new account; the store assigns the id.
    ///
    /// Fails with `AuthError::AccountNameTaken` if the name exists.
    async fn save(&self, account: NewUserAccount) -> AuthResult<UserAccount>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Update session (last activity)
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
