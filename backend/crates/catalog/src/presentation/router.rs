//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::catalog::Catalog;
use crate::presentation::handlers;

/// Create the product router over a loaded catalog
pub fn catalog_router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/products/welcome", get(handlers::welcome))
        .route("/products/all", get(handlers::list_products))
        .route("/products/{id}", get(handlers::get_product))
        .with_state(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::CatalogConfig;
    use crate::presentation::dto::WELCOME;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        catalog_router(Arc::new(Catalog::load(&CatalogConfig::default())))
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn welcome_returns_plain_text() {
        let response = app().oneshot(get_req("/products/welcome")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], WELCOME.as_bytes());
    }

    #[tokio::test]
    async fn all_returns_every_product() {
        let response = app().oneshot(get_req("/products/all")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let products = json.as_array().unwrap();
        assert_eq!(products.len(), 99);
        assert_eq!(products[0]["productId"], 1);
        assert_eq!(products[98]["productId"], 99);
    }

    #[tokio::test]
    async fn by_id_returns_the_product() {
        let response = app().oneshot(get_req("/products/42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["productId"], 42);
        assert_eq!(json["productName"], "product 42");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let response = app().oneshot(get_req("/products/100")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["detail"], "Product with id: 100 not found");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let response = app().oneshot(get_req("/products/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
