//! Principal
//!
//! The authenticated identity for one request. Built from a stored account
//! on each authentication attempt and never persisted.

use crate::domain::entity::user_account::UserAccount;
use crate::domain::value_object::role::{RoleSet, RoleToken};
use crate::domain::value_object::user_password::UserPassword;

#[derive(Debug, Clone)]
pub struct Principal {
    pub name: String,
    pub password_hash: UserPassword,
    pub roles: RoleSet,
}

impl Principal {
    pub fn has_role(&self, role: &RoleToken) -> bool {
        self.roles.contains(role)
    }
}

impl From<UserAccount> for Principal {
    fn from(account: UserAccount) -> Self {
        let roles = account.role_set();
        Self {
            name: account.name,
            password_hash: account.password_hash,
            roles,
        }
    }
}
