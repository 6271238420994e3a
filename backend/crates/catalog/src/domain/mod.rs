//! Domain Layer

pub mod product;

pub use product::Product;
