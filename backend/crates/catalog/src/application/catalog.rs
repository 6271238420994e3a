//! Catalog Snapshot
//!
//! Builds the product list once and serves read-only lookups from it.

use kernel::id::ProductId;
use rand::Rng;

use crate::application::config::CatalogConfig;
use crate::domain::product::Product;
use crate::error::{CatalogError, CatalogResult};

/// Immutable, process-lifetime product list
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Generate the catalog from the thread-local RNG
    pub fn load(config: &CatalogConfig) -> Self {
        Self::generate(config, &mut rand::rng())
    }

    /// Generate the catalog from the given RNG
    pub fn generate<R: Rng + ?Sized>(config: &CatalogConfig, rng: &mut R) -> Self {
        // Product ids are i32; larger counts are capped rather than wrapped
        let last_id = i32::try_from(config.product_count).unwrap_or(i32::MAX);
        let products: Vec<Product> = (1..=last_id)
            .map(|id| {
                let quantity = rng.random_range(0..config.max_quantity.max(1));
                let price = f64::from(rng.random_range(0..config.max_price.max(1)));
                Product::new(ProductId::new(id), format!("product {id}"), quantity, price)
            })
            .collect();

        tracing::info!(product_count = products.len(), "Product catalog loaded");

        Self { products }
    }

    /// Build a catalog from an explicit product list
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in load order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// First product with the given id
    pub fn get_by_id(&self, id: ProductId) -> CatalogResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
