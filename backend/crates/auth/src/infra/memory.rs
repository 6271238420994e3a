//! In-memory repository implementation.
//!
//! Used by tests and when no database is configured. State lives in
//! `HashMap`s behind `tokio::sync::RwLock` and is lost on restart.
//! Writes take the write lock for the whole check-and-insert, so at most
//! one registration per name can succeed.

use chrono::Utc;
use kernel::id::AccountId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user_account::{NewUserAccount, UserAccount},
};
use crate::domain::repository::{AuthSessionRepository, UserAccountRepository};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Accounts {
    next_id: i64,
    by_name: HashMap<String, UserAccount>,
}

/// Cloning shares the underlying maps.
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    accounts: Arc<RwLock<Accounts>>,
    sessions: Arc<RwLock<HashMap<Uuid, AuthSession>>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.by_name.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl UserAccountRepository for InMemoryAuthRepository {
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<UserAccount>> {
        Ok(self.accounts.read().await.by_name.get(name).cloned())
    }

    async fn save(&self, account: NewUserAccount) -> AuthResult<UserAccount> {
        let mut accounts = self.accounts.write().await;
        if accounts.by_name.contains_key(&account.name) {
            return Err(AuthError::AccountNameTaken);
        }

        accounts.next_id += 1;
        let saved = account.with_id(AccountId::new(accounts.next_id));
        accounts.by_name.insert(saved.name.clone(), saved.clone());
        Ok(saved)
    }
}

impl AuthSessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.write().await;
        // Sessions that are never presented again are dropped here
        sessions.retain(|_, s| s.expires_at_ms >= now_ms);
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        if let Some(stored) = self.sessions.write().await.get_mut(&session.session_id) {
            stored.expires_at_ms = session.expires_at_ms;
            stored.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at_ms >= now_ms);
        let deleted = (before - sessions.len()) as u64;

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}
