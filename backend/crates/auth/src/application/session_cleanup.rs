//! Expired Session Cleanup
//!
//! Background task that purges expired sessions on a fixed interval.
//! The first purge runs immediately.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::repository::AuthSessionRepository;

/// Spawn the cleanup loop. Failures are logged and retried next tick.
pub fn spawn_session_cleanup<R>(repo: Arc<R>, every: Duration) -> JoinHandle<()>
where
    R: AuthSessionRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            if let Err(e) = repo.cleanup_expired().await {
                tracing::warn!(error = %e, "Auth session cleanup failed, retrying next tick");
            }
        }
    })
}
