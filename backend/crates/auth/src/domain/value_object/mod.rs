//! Value Object Module

pub mod role;
pub mod user_password;

pub use role::{RoleSet, RoleToken};
pub use user_password::{RawPassword, UserPassword};
