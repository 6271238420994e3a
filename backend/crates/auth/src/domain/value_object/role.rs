//! Role Tokens
//!
//! A stored account carries its roles as one comma-separated string
//! (e.g. `"ROLE_ADMIN,ROLE_USER"`). Authorization compares tokens as
//! literal strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single authorization label, e.g. `ROLE_ADMIN`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleToken(String);

impl RoleToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of role tokens held by a principal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<RoleToken>);

impl RoleSet {
    /// Split a stored roles field on `','`.
    ///
    /// Tokens are kept verbatim: `"ROLE_ADMIN, ROLE_USER"` yields
    /// `"ROLE_ADMIN"` and `" ROLE_USER"`. Empty tokens are dropped, so `""`
    /// gives an empty set.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .filter(|token| !token.is_empty())
                .map(RoleToken::new)
                .collect(),
        )
    }

    pub fn contains(&self, role: &RoleToken) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleToken> {
        self.0.iter()
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(RoleToken::as_str).collect();
        f.write_str(&joined.join(","))
    }
}
