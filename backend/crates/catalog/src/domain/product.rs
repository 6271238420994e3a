//! Product Entity

use kernel::id::ProductId;

/// A catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units in stock, always below 10
    pub quantity: u32,
    /// Integral value in `[0, 5000)`
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}
