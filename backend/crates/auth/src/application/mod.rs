//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod check_session;
pub mod config;
pub mod load_principal;
pub mod register;
pub mod session_cleanup;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use load_principal::LoadPrincipalUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use session_cleanup::spawn_session_cleanup;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
