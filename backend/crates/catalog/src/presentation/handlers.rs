//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use kernel::id::ProductId;
use std::sync::Arc;

use crate::application::catalog::Catalog;
use crate::error::CatalogResult;
use crate::presentation::dto::{ProductResponse, WELCOME};

/// GET /products/welcome
pub async fn welcome() -> &'static str {
    WELCOME
}

/// GET /products/all
pub async fn list_products(State(catalog): State<Arc<Catalog>>) -> Json<Vec<ProductResponse>> {
    Json(catalog.list().iter().map(ProductResponse::from).collect())
}

/// GET /products/{id}
pub async fn get_product(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<ProductId>,
) -> CatalogResult<Json<ProductResponse>> {
    let product = catalog.get_by_id(id)?;
    Ok(Json(ProductResponse::from(product)))
}
