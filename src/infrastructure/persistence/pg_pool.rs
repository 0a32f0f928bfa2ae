use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;

/// How hard `create_pool` tries before giving up on an unreachable database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectRetry {
    pub attempts: u32,
    pub initial_delay: Duration,
}

impl Default for ConnectRetry {
    fn default() -> Self {
        Self {
            attempts: 5,
            initial_delay: Duration::from_millis(500),
        }
    }
}

impl ConnectRetry {
    pub fn new(attempts: u32, initial_delay: Duration) -> Self {
        Self {
            attempts,
            initial_delay,
        }
    }

    /// Back-off between attempts, doubling each time. Yields `attempts` delays.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        let initial = self.initial_delay;
        (0..self.attempts).map(move |n| initial.saturating_mul(1u32 << n.min(16)))
    }
}

#[instrument(skip(url, retry), fields(attempts = retry.attempts))]
pub async fn create_pool(
    url: &str,
    max_connections: u32,
    retry: ConnectRetry,
) -> Result<PgPool, RepositoryError> {
    let options = PgPoolOptions::new().max_connections(max_connections);
    let mut delays = retry.delays();

    loop {
        let error = match options.clone().connect(url).await {
            Ok(pool) => {
                info!(max_connections, "Export job database connected");
                return Ok(pool);
            }
            Err(e) => e,
        };

        let Some(delay) = delays.next() else {
            return Err(RepositoryError::ConnectionFailed(error.to_string()));
        };
        warn!(error = %error, delay_ms = delay.as_millis(), "Export job database unreachable");
        tokio::time::sleep(delay).await;
    }
}

/// Applies the bundled `migrations/` directory.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(format!("migration failed: {e}")))?;
    info!("Database migrations applied");
    Ok(())
}
