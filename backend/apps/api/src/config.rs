//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use anyhow::{Context, bail};
use auth::application::config::AuthConfig;
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose;
use catalog::CatalogConfig;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Process-level configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` runs on the in-memory credential store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub frontend_origins: Vec<String>,
    /// Decoded `AUTH_SESSION_SECRET`
    pub session_secret: Option<[u8; 32]>,
    pub password_pepper: Option<Vec<u8>>,
    pub catalog_product_count: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_url: None,
            database_max_connections: 5,
            frontend_origins: split_origins(DEFAULT_FRONTEND_ORIGINS),
            session_secret: None,
            password_pepper: None,
            catalog_product_count: CatalogConfig::default().product_count,
        }
    }
}

impl ServerConfig {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => defaults.database_max_connections,
        };

        let catalog_product_count = match var("CATALOG_PRODUCT_COUNT") {
            Some(v) => parse_product_count(&v)?,
            None => defaults.catalog_product_count,
        };

        let session_secret = var("AUTH_SESSION_SECRET")
            .map(|v| decode_secret(&v))
            .transpose()?;

        Ok(Self {
            bind_addr,
            database_url: var("DATABASE_URL"),
            database_max_connections,
            frontend_origins: var("FRONTEND_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or(defaults.frontend_origins),
            session_secret,
            password_pepper: var("AUTH_PASSWORD_PEPPER").map(String::into_bytes),
            catalog_product_count,
        })
    }

    /// Auth configuration for this process.
    ///
    /// Debug builds fall back to a random secret and insecure cookies.
    /// Release builds require `AUTH_SESSION_SECRET`.
    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        let base = match (self.session_secret, cfg!(debug_assertions)) {
            (Some(secret), true) => AuthConfig {
                session_secret: secret,
                ..AuthConfig::development()
            },
            (Some(secret), false) => AuthConfig {
                session_secret: secret,
                ..AuthConfig::default()
            },
            (None, true) => AuthConfig::development(),
            (None, false) => bail!("AUTH_SESSION_SECRET must be set in production"),
        };

        Ok(AuthConfig {
            password_pepper: self.password_pepper.clone(),
            ..base
        })
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::with_product_count(self.catalog_product_count)
    }

    /// CORS origins that parse as header values; others are dropped
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        self.frontend_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

/// Product ids are `i32`, so the count must fit in one
fn parse_product_count(raw: &str) -> anyhow::Result<u32> {
    let count: u32 = raw
        .trim()
        .parse()
        .context("CATALOG_PRODUCT_COUNT must be a non-negative integer")?;
    if i32::try_from(count).is_err() {
        bail!("CATALOG_PRODUCT_COUNT must be at most {}, got {count}", i32::MAX);
    }
    Ok(count)
}

fn decode_secret(b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(b64.trim())
        .context("AUTH_SESSION_SECRET must be base64")?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        anyhow::anyhow!(
            "AUTH_SESSION_SECRET must decode to 32 bytes, got {}",
            bytes.len()
        )
    })
}
