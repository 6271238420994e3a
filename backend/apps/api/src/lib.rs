//! Product API
//!
//! Composes the catalog and auth routers behind the policy middleware.
//! `main` picks the credential store; tests drive [`build_router`] with the
//! in-memory one.

pub mod config;
pub mod policy;

use auth::application::config::AuthConfig;
use auth::domain::policy::PolicyTable;
use auth::domain::repository::{AuthSessionRepository, UserAccountRepository};
use auth::presentation::middleware::{PolicyState, enforce_policy};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use catalog::Catalog;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Everything the router needs besides the store
#[derive(Clone)]
pub struct AppParts {
    pub auth_config: Arc<AuthConfig>,
    pub catalog: Arc<Catalog>,
    pub policies: Arc<PolicyTable>,
    pub allowed_origins: Vec<HeaderValue>,
}

/// Build the full application router over the given credential store.
///
/// Every route, including unmatched paths, passes through the policy
/// middleware first.
pub fn build_router<R>(repo: Arc<R>, parts: AppParts) -> Router
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let policy_state = PolicyState {
        repo: repo.clone(),
        config: parts.auth_config.clone(),
        table: parts.policies,
    };

    Router::new()
        .merge(catalog::catalog_router(parts.catalog))
        .merge(auth::auth_router(repo, parts.auth_config))
        .layer(axum::middleware::from_fn_with_state(
            policy_state,
            enforce_policy::<R>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(parts.allowed_origins))
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
