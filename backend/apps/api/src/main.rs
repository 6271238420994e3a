//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors are rendered by
//! the crate-local error types.

use anyhow::Context;
use api::config::ServerConfig;
use api::policy::route_policies;
use api::{AppParts, build_router};
use auth::application::spawn_session_cleanup;
use auth::domain::repository::{AuthSessionRepository, UserAccountRepository};
use auth::{InMemoryAuthRepository, PgAuthRepository};
use axum::Router;
use catalog::Catalog;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,catalog=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = Catalog::load(&config.catalog_config());
    let parts = AppParts {
        auth_config: Arc::new(config.auth_config()?),
        catalog: Arc::new(catalog),
        policies: Arc::new(route_policies().context("invalid route policy table")?),
        allowed_origins: config.allowed_origins(),
    };

    let app = match &config.database_url {
        Some(database_url) => {
            let repo = connect_postgres(&config, database_url).await?;
            app_with_cleanup(Arc::new(repo), parts)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, accounts and sessions are kept in memory");
            app_with_cleanup(Arc::new(InMemoryAuthRepository::new()), parts)
        }
    };

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router and start purging expired sessions from `repo`.
fn app_with_cleanup<R>(repo: Arc<R>, parts: AppParts) -> Router
where
    R: UserAccountRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    // First tick runs immediately, covering sessions left from a previous run
    spawn_session_cleanup(repo.clone(), parts.auth_config.session_cleanup_interval);
    build_router(repo, parts)
}

async fn connect_postgres(
    config: &ServerConfig,
    database_url: &str,
) -> anyhow::Result<PgAuthRepository> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    Ok(PgAuthRepository::new(pool))
}
