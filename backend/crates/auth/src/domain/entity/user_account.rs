//! User Account Entity
//!
//! A registered account as held by the credential store.

use kernel::id::AccountId;

use crate::domain::value_object::{role::RoleSet, user_password::UserPassword};

/// Stored user account
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// Assigned by the store
    pub id: AccountId,
    /// Login identity, unique and case-sensitive
    pub name: String,
    pub email: String,
    pub password_hash: UserPassword,
    /// Raw comma-separated role string, stored verbatim
    pub roles: String,
}

impl UserAccount {
    pub fn role_set(&self) -> RoleSet {
        RoleSet::parse(&self.roles)
    }
}

/// An account that has not been saved yet
#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub name: String,
    pub email: String,
    /// Must already be hashed
    pub password_hash: UserPassword,
    pub roles: String,
}

impl NewUserAccount {
    /// Attach the id the store assigned
    pub fn with_id(self, id: AccountId) -> UserAccount {
        UserAccount {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            roles: self.roles,
        }
    }
}
