//! Common ID Types
//!
//! Type-safe integer ID wrappers. Catalog ids are assigned at load time,
//! account ids by the store, so both are plain integers underneath.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ProductId = Id<markers::Product, i32>;
///
/// let id = ProductId::new(7);
/// assert_eq!(id.get(), 7);
/// ```
pub struct Id<T, V = i64> {
    value: V,
    _marker: PhantomData<fn() -> T>,
}

impl<T, V: Copy> Id<T, V> {
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub const fn get(&self) -> V {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T, V: Copy> Clone for Id<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V: Copy> Copy for Id<T, V> {}

impl<T, V: PartialEq> PartialEq for Id<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, V: Eq> Eq for Id<T, V> {}

impl<T, V: Hash> Hash for Id<T, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, V: fmt::Display> fmt::Debug for Id<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T, V: fmt::Display> fmt::Display for Id<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T, V: Serialize> Serialize for Id<T, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T, V: Deserialize<'de> + Copy> Deserialize<'de> for Id<T, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        V::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for catalog products
    pub struct Product;

    /// Marker for stored user accounts
    pub struct Account;
}

/// Product ids are `1..=N`, assigned when the catalog is generated
pub type ProductId = Id<markers::Product, i32>;

/// Account ids are assigned by the credential store
pub type AccountId = Id<markers::Account, i64>;
