//! Catalog Configuration

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Number of products generated at startup (ids `1..=product_count`)
    pub product_count: u32,
    /// Exclusive upper bound for generated quantities
    pub max_quantity: u32,
    /// Exclusive upper bound for generated prices
    pub max_price: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            product_count: 99,
            max_quantity: 10,
            max_price: 5000,
        }
    }
}

impl CatalogConfig {
    /// Create config for development (same sizes as production)
    pub fn development() -> Self {
        Self::default()
    }

    pub fn with_product_count(product_count: u32) -> Self {
        Self {
            product_count,
            ..Default::default()
        }
    }
}
