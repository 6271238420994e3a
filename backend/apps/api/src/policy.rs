//! Route Policy Table
//!
//! The single place that decides who may call which route. Ordering is
//! handled by [`PolicyTable::new`]; declaration order only breaks ties.

use auth::domain::policy::{PatternError, PolicyRule, PolicyTable};
use axum::http::Method;

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";

/// Policies for every route the API serves
pub fn route_policies() -> Result<PolicyTable, PatternError> {
    Ok(PolicyTable::new(vec![
        PolicyRule::public("/products/welcome")?,
        PolicyRule::public("/products/new")?,
        PolicyRule::role(Method::GET, "/products/all", ROLE_ADMIN)?,
        PolicyRule::role(Method::GET, "/products/{id}", ROLE_USER)?,
        PolicyRule::authenticated("/products/**")?,
        PolicyRule::public("/login")?,
        PolicyRule::public("/logout")?,
    ]))
}
