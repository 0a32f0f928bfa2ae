use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use mdexport::application::ports::JobRepository;
use mdexport::application::services::JobService;
use mdexport::infrastructure::observability::{TracingConfig, init_tracing};
use mdexport::infrastructure::persistence::{
    ConnectRetry, InMemoryJobRepository, PgJobRepository, create_pool, run_migrations,
};
use mdexport::presentation::config::DatabaseSettings;
use mdexport::presentation::{AppState, Environment, Settings, StorageBackend, create_router};

async fn build_job_repository(database: &DatabaseSettings) -> anyhow::Result<Arc<dyn JobRepository>> {
    match database.backend {
        StorageBackend::Postgres => {
            let retry = ConnectRetry::new(
                database.connect_retries,
                Duration::from_millis(database.connect_backoff_ms),
            );
            let pool = create_pool(&database.url, database.max_connections, retry).await?;
            run_migrations(&pool).await?;
            Ok(Arc::new(PgJobRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory job store; jobs are lost on restart");
            Ok(Arc::new(InMemoryJobRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let job_repository = build_job_repository(&settings.database).await?;
    let job_service = Arc::new(JobService::new(job_repository));
    let state = AppState::new(job_service, settings.export.clone());

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
