use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;
use crate::config::DatabaseSettings;

const CONNECT_ATTEMPTS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects with exponential backoff, then applies pending migrations.
#[instrument(skip(settings), fields(max_connections = settings.max_connections))]
pub async fn connect_and_migrate(settings: &DatabaseSettings) -> Result<PgPool, RepositoryError> {
    let url = settings
        .url
        .as_deref()
        .ok_or_else(|| RepositoryError::ConnectionFailed("database.url is not set".to_string()))?;

    let pool = create_pool(url, settings.max_connections).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let mut attempt = 1;
    let mut delay = Duration::from_millis(500);

    loop {
        let connected = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(url)
            .await;

        match connected {
            Ok(pool) => {
                info!(attempt, "PostgreSQL connection pool established");
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(
                    error = %e,
                    attempt,
                    delay_ms = delay.as_millis(),
                    "PostgreSQL connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => return Err(RepositoryError::ConnectionFailed(e.to_string())),
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(format!("migration failed: {e}")))?;
    info!("Database migrations applied");
    Ok(())
}
