//! Policy Enforcement Middleware
//!
//! Resolves the caller's identity (session cookie first, then HTTP Basic)
//! and checks the route table before the request reaches a handler.
//! On success the principal, if any, is placed in request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::basic::BasicCredentials;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticateUseCase, CheckSessionUseCase};
use crate::domain::entity::principal::Principal;
use crate::domain::policy::{Decision, PolicyTable};
use crate::domain::repository::{AuthSessionRepository, UserAccountRepository};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct PolicyState<R>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub table: Arc<PolicyTable>,
}

/// Middleware that enforces the policy table on every request
pub async fn enforce_policy<R>(
    State(state): State<PolicyState<R>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    // Body is not Sync; keep only the parts borrowed across the lookup
    let (mut parts, body) = req.into_parts();
    let principal = resolve_principal(&state, &parts.headers).await;

    let method = parts.method.clone();
    let path = parts.uri.path().to_string();

    match state.table.evaluate(&method, &path, principal.as_ref()) {
        Decision::Allowed => {
            if let Some(principal) = principal {
                parts.extensions.insert(principal);
            }
            Ok(next.run(Request::from_parts(parts, body)).await)
        }
        Decision::Denied(reason) => {
            tracing::info!(
                method = %method,
                path = %path,
                reason = %reason,
                principal = principal.as_ref().map(|p| p.name.as_str()),
                "Request denied"
            );

            let err = match principal {
                None => AuthError::AuthenticationRequired,
                Some(_) => AuthError::AccessDenied {
                    reason: reason.to_string(),
                },
            };
            Err(err.into_response())
        }
    }
}

/// Identity for this request, or `None` if no usable credentials were sent.
///
/// Bad credentials are not an error here; the policy decides what an
/// anonymous request may do.
async fn resolve_principal<R>(state: &PolicyState<R>, headers: &HeaderMap) -> Option<Principal>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name)
    {
        let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
        match use_case.execute(&token).await {
            Ok(principal) => return Some(principal),
            Err(e) => tracing::debug!(error = %e, "Ignoring unusable session cookie"),
        }
    }

    let credentials = BasicCredentials::from_headers(headers)?;
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
    match use_case
        .execute(&credentials.username, credentials.password)
        .await
    {
        Ok(principal) => Some(principal),
        Err(e) => {
            tracing::warn!(
                account_name = %credentials.username,
                error = %e,
                "Basic authentication failed"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::domain::policy::PolicyRule;
    use crate::infra::memory::InMemoryAuthRepository;
    use axum::http::{Method, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router};
    use tower::ServiceExt;

    async fn app() -> Router {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                name: "user".to_string(),
                email: String::new(),
                password: "pw".to_string(),
                roles: "ROLE_USER".to_string(),
            })
            .await
            .unwrap();

        let table = PolicyTable::new(vec![
            PolicyRule::public("/open").unwrap(),
            PolicyRule::authenticated("/me").unwrap(),
            PolicyRule::role(Method::GET, "/admin", "ROLE_ADMIN").unwrap(),
        ]);
        let state = PolicyState {
            repo,
            config,
            table: Arc::new(table),
        };

        Router::new()
            .route("/open", get(|| async { "open" }))
            .route(
                "/me",
                get(|Extension(p): Extension<Principal>| async move { p.name }),
            )
            .route("/admin", get(|| async { "admin" }))
            .route("/unlisted", get(|| async { "unlisted" }))
            .layer(axum::middleware::from_fn_with_state(
                state,
                enforce_policy::<InMemoryAuthRepository>,
            ))
    }

    fn get_req(uri: &str, auth: Option<(&str, &str)>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some((username, password)) = auth {
            let creds = BasicCredentials {
                username: username.to_string(),
                password: password.to_string(),
            };
            builder = builder.header(header::AUTHORIZATION, creds.to_header_value());
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn public_route_needs_no_identity() {
        let response = app().await.oneshot(get_req("/open", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn anonymous_gets_challenge() {
        let response = app().await.oneshot(get_req("/me", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"products\""
        );
    }

    #[tokio::test]
    async fn principal_reaches_handler() {
        let response = app()
            .await
            .oneshot(get_req("/me", Some(("user", "pw"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_password_is_anonymous() {
        let response = app()
            .await
            .oneshot(get_req("/me", Some(("user", "bad"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app()
            .await
            .oneshot(get_req("/open", Some(("user", "bad"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_role_is_forbidden() {
        let response = app()
            .await
            .oneshot(get_req("/admin", Some(("user", "pw"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[tokio::test]
    async fn unlisted_route_is_denied() {
        let response = app()
            .await
            .oneshot(get_req("/unlisted", Some(("user", "pw"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app()
            .await
            .oneshot(get_req("/unlisted", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
