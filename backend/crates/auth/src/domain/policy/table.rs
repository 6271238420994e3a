//! Policy Table
//!
//! Rules are evaluated most-specific-first; the first matching rule wins.

use axum::http::Method;
use std::cmp::Reverse;

use super::{Decision, DenyReason, PolicyRule, RouteState};
use crate::domain::entity::principal::Principal;

#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: Vec<PolicyRule>,
}

impl PolicyTable {
    /// Order rules by specificity:
    /// 1. more literal segments
    /// 2. more single-segment matchers
    /// 3. no trailing `**`
    /// 4. method-restricted
    ///
    /// Ties keep declaration order.
    pub fn new(mut rules: Vec<PolicyRule>) -> Self {
        rules.sort_by_key(|rule| {
            Reverse((
                rule.pattern.literal_count(),
                rule.pattern.single_count(),
                !rule.pattern.has_tail_wildcard(),
                rule.method.is_some(),
            ))
        });
        Self { rules }
    }

    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    pub fn resolve(&self, method: &Method, path: &str) -> RouteState {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map_or(RouteState::Unmatched, |rule| RouteState::from(&rule.policy))
    }

    pub fn evaluate(&self, method: &Method, path: &str, principal: Option<&Principal>) -> Decision {
        match (self.resolve(method, path), principal) {
            (RouteState::PublicAllowed, _) => Decision::Allowed,
            (RouteState::Unmatched, _) => Decision::Denied(DenyReason::NoMatchingRule),
            (RouteState::RequiresAuthentication, Some(_)) => Decision::Allowed,
            (RouteState::RequiresAuthentication, None) => {
                Decision::Denied(DenyReason::Unauthenticated)
            }
            (RouteState::RequiresRole(role), Some(p)) if p.has_role(&role) => Decision::Allowed,
            (RouteState::RequiresRole(role), Some(_)) => {
                Decision::Denied(DenyReason::MissingRole(role))
            }
            (RouteState::RequiresRole(_), None) => Decision::Denied(DenyReason::Unauthenticated),
        }
    }
}
