//! Entity Module

pub mod auth_session;
pub mod principal;
pub mod user_account;

pub use auth_session::AuthSession;
pub use principal::Principal;
pub use user_account::{NewUserAccount, UserAccount};
