//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::product::Product;

/// Greeting served by the public endpoint
pub const WELCOME: &str = "Welcome, this endpoint isn't secure";

/// Product as rendered to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.get(),
            product_name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
        }
    }
}
