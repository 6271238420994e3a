//! Authorization Policy
//!
//! Every request is checked against an ordered table of
//! `(method, path pattern) -> policy` rules before it reaches a handler.
//! A request no rule matches is denied.

pub mod pattern;
pub mod table;

use axum::http::Method;
use std::fmt;

use crate::domain::value_object::role::RoleToken;

pub use pattern::{PathPattern, PatternError};
pub use table::PolicyTable;

/// Realm advertised in `WWW-Authenticate` challenges
pub const REALM: &str = "products";

/// What a route requires of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Public,
    Authenticated,
    RequiresRole(RoleToken),
}

/// One entry of the route table
#[derive(Debug, Clone)]
pub struct PolicyRule {
    /// `None` matches any method
    pub method: Option<Method>,
    pub pattern: PathPattern,
    pub policy: Policy,
}

impl PolicyRule {
    pub fn new(method: Option<Method>, pattern: &str, policy: Policy) -> Result<Self, PatternError> {
        Ok(Self {
            method,
            pattern: pattern.parse()?,
            policy,
        })
    }

    pub fn public(pattern: &str) -> Result<Self, PatternError> {
        Self::new(None, pattern, Policy::Public)
    }

    pub fn authenticated(pattern: &str) -> Result<Self, PatternError> {
        Self::new(None, pattern, Policy::Authenticated)
    }

    pub fn role(method: Method, pattern: &str, role: &str) -> Result<Self, PatternError> {
        Self::new(Some(method), pattern, Policy::RequiresRole(RoleToken::new(role)))
    }

    /// A `GET` rule also covers `HEAD`, which the router serves with the
    /// `GET` handler.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.method
            .as_ref()
            .is_none_or(|m| m == method || (*m == Method::GET && *method == Method::HEAD))
            && self.pattern.matches(path)
    }
}

/// Outcome of route resolution, before identity is considered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteState {
    Unmatched,
    PublicAllowed,
    RequiresAuthentication,
    RequiresRole(RoleToken),
}

impl From<&Policy> for RouteState {
    fn from(policy: &Policy) -> Self {
        match policy {
            Policy::Public => RouteState::PublicAllowed,
            Policy::Authenticated => RouteState::RequiresAuthentication,
            Policy::RequiresRole(role) => RouteState::RequiresRole(role.clone()),
        }
    }
}

/// Final authorization decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// Route requires an identity and there is none
    Unauthenticated,
    /// Principal lacks the route's role
    MissingRole(RoleToken),
    /// No rule covers the route
    NoMatchingRule,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::Unauthenticated => f.write_str("authentication required"),
            DenyReason::MissingRole(role) => write!(f, "missing role {}", role),
            DenyReason::NoMatchingRule => f.write_str("no policy covers this route"),
        }
    }
}
