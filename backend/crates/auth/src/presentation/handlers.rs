//! HTTP Handlers

use axum::extract::{FromRequest, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    RegisterInput, RegisterUseCase, SignInInput, SignInUseCase, SignOutUseCase,
};
use crate::domain::repository::{AuthSessionRepository, UserAccountRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, RegisterRequest, USER_ADDED};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Registration
// ============================================================================

/// POST /products/new
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
            roles: req.roles,
        })
        .await?;

    Ok((StatusCode::OK, USER_ADDED))
}

// ============================================================================
// Login
// ============================================================================

/// Login body: JSON when `Content-Type` says so, form-encoded otherwise
pub struct LoginForm(pub LoginRequest);

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let parsed = if is_json {
            Json::<LoginRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Form::<LoginRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map(Self).map_err(|detail| {
            AppError::bad_request(detail)
                .with_action("Send username and password")
                .into_response()
        })
    }
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    LoginForm(req): LoginForm,
) -> AuthResult<impl IntoResponse>
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, platform::cookie::set_cookie_header(&cookie))],
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        if let Err(e) = use_case.execute(&token).await {
            tracing::debug!(error = %e, "Sign out with unusable session cookie");
        }
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, platform::cookie::set_cookie_header(&cookie))],
    )
}
