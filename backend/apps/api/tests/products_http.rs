//! End-to-end request tests against the composed router and the
//! in-memory credential store.

use api::policy::route_policies;
use api::{AppParts, build_router};
use auth::application::config::AuthConfig;
use auth::domain::repository::UserAccountRepository;
use auth::InMemoryAuthRepository;
use auth::domain::value_object::user_password::RawPassword;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose;
use catalog::{Catalog, CatalogConfig};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    repo: Arc<InMemoryAuthRepository>,
    auth_config: Arc<AuthConfig>,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let auth_config = Arc::new(AuthConfig::development());
        let parts = AppParts {
            auth_config: auth_config.clone(),
            catalog: Arc::new(Catalog::load(&CatalogConfig::default())),
            policies: Arc::new(route_policies().unwrap()),
            allowed_origins: vec![],
        };
        let router = build_router(repo.clone(), parts);
        Self {
            repo,
            auth_config,
            router,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn register(&self, name: &str, password: &str, roles: &str) {
        let body = serde_json::json!({
            "name": name,
            "email": format!("{name}@example.com"),
            "password": password,
            "roles": roles,
        });
        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/products/new")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_as(uri: &str, username: &str, password: &str) -> Request<Body> {
    let encoded = general_purpose::STANDARD.encode(format!("{username}:{password}"));
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Basic {encoded}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn welcome_is_public() {
    let app = TestApp::new();
    let response = app.send(get("/products/welcome")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "Welcome, this endpoint isn't secure"
    );
}

#[tokio::test]
async fn anonymous_listing_is_challenged() {
    let app = TestApp::new();
    let response = app.send(get("/products/all")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"products\""
    );
}

#[tokio::test]
async fn user_role_cannot_list() {
    let app = TestApp::new();
    app.register("ursula", "pw", "ROLE_USER").await;

    let response = app.send(get_as("/products/all", "ursula", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_lists_every_product() {
    let app = TestApp::new();
    app.register("ada", "pw", "ROLE_ADMIN").await;

    let response = app.send(get_as("/products/all", "ada", "pw")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let products = json.as_array().unwrap();
    assert_eq!(products.len(), 99);
    for (index, product) in products.iter().enumerate() {
        assert_eq!(product["productId"], index as i64 + 1);
    }
}

#[tokio::test]
async fn admin_without_user_role_cannot_fetch_by_id() {
    let app = TestApp::new();
    app.register("ada", "pw", "ROLE_ADMIN").await;
    app.register("both", "pw", "ROLE_ADMIN,ROLE_USER").await;

    let response = app.send(get_as("/products/5", "ada", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.send(get_as("/products/5", "both", "pw")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["productId"], 5);

    let response = app.send(get_as("/products/all", "both", "pw")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = TestApp::new();
    app.register("ursula", "pw", "ROLE_USER").await;

    let response = app.send(get_as("/products/100", "ursula", "pw")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["detail"],
        "Product with id: 100 not found"
    );
}

#[tokio::test]
async fn whitespace_in_roles_is_not_trimmed() {
    let app = TestApp::new();
    app.register("spacey", "pw", "ROLE_ADMIN, ROLE_USER").await;

    let response = app.send(get_as("/products/5", "spacey", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.send(get_as("/products/all", "spacey", "pw")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_roles_authenticate_but_authorize_nothing() {
    let app = TestApp::new();
    app.register("nobody", "pw", "").await;

    let response = app.send(get_as("/products/5", "nobody", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Authenticated-only route: allowed through, then no handler
    let response = app.send(get_as("/products/5/reviews", "nobody", "pw")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn head_as(uri: &str, username: &str, password: &str) -> Request<Body> {
    let encoded = general_purpose::STANDARD.encode(format!("{username}:{password}"));
    Request::builder()
        .method("HEAD")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Basic {encoded}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn head_requests_need_the_same_roles_as_get() {
    let app = TestApp::new();
    app.register("norole", "pw", "").await;
    app.register("ursula", "pw", "ROLE_USER").await;

    let response = app.send(head_as("/products/all", "norole", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.send(head_as("/products/5", "norole", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.send(head_as("/products/all", "ursula", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.send(head_as("/products/5", "ursula", "pw")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn bad_password_is_treated_as_anonymous() {
    let app = TestApp::new();
    app.register("ursula", "pw", "ROLE_USER").await;

    let response = app.send(get_as("/products/5", "ursula", "wrong")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.send(get_as("/products/5", "nobody", "pw")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn registration_stores_a_verifiable_hash() {
    let app = TestApp::new();
    app.register("devin", "pw", "ROLE_USER").await;

    let account = app.repo.find_by_name("devin").await.unwrap().unwrap();
    assert_ne!(account.password_hash.as_phc_string(), "pw");
    assert!(
        account
            .password_hash
            .verify(&RawPassword::new("pw".to_string()), app.auth_config.pepper())
    );
    assert!(
        !account
            .password_hash
            .verify(&RawPassword::new("pw2".to_string()), app.auth_config.pepper())
    );
    assert_eq!(account.roles, "ROLE_USER");
    assert_eq!(account.email, "devin@example.com");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = TestApp::new();
    app.register("devin", "pw", "ROLE_USER").await;

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/products/new")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"devin","password":"other"}"#))
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn session_cookie_grants_access_until_logout() {
    let app = TestApp::new();
    app.register("ursula", "pw", "ROLE_USER").await;

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=ursula&password=pw"))
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let with_cookie = |method: &str, uri: &str| {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.send(with_cookie("GET", "/products/5")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send(with_cookie("GET", "/products/all")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.send(with_cookie("POST", "/logout")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.send(with_cookie("GET", "/products/5")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tampered_session_cookie_is_ignored() {
    let app = TestApp::new();
    let cookie = format!(
        "{}=00000000-0000-4000-8000-000000000000.not-a-signature",
        app.auth_config.session_cookie_name
    );

    let response = app
        .send(
            Request::builder()
                .uri("/products/5")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unmatched_routes_are_denied() {
    let app = TestApp::new();
    let response = app.send(get("/admin")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.register("ada", "pw", "ROLE_ADMIN").await;
    let response = app.send(get_as("/admin", "ada", "pw")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
