//! Inserts a couple of demo jobs into an empty PostgreSQL job store.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use mdexport::application::services::JobService;
use mdexport::domain::{ExportTarget, NewExportJob};
use mdexport::infrastructure::observability::{TracingConfig, init_tracing};
use mdexport::infrastructure::persistence::{
    ConnectRetry, PgJobRepository, create_pool, run_migrations,
};
use mdexport::presentation::{Environment, Settings};

const SEED_USER_ID: &str = "user_123";

fn seed_jobs() -> Vec<NewExportJob> {
    vec![
        NewExportJob {
            user_id: SEED_USER_ID.to_string(),
            markdown: "# Hello World\nThis is a test export.".to_string(),
            target: ExportTarget::Pdf,
            template_id: "generic".to_string(),
        },
        NewExportJob {
            user_id: SEED_USER_ID.to_string(),
            markdown: "# Monthly Report\n## Sales\n- Q1: $100k\n- Q2: $150k".to_string(),
            target: ExportTarget::Email,
            template_id: "report".to_string(),
        },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;
    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let database = &settings.database;
    let retry = ConnectRetry::new(
        database.connect_retries,
        Duration::from_millis(database.connect_backoff_ms),
    );
    let pool = create_pool(&database.url, database.max_connections, retry).await?;
    run_migrations(&pool).await?;
    let service = JobService::new(Arc::new(PgJobRepository::new(pool)));

    if !service.list_jobs(1).await?.is_empty() {
        tracing::info!("Database already seeded");
        return Ok(());
    }

    for job in seed_jobs() {
        service.create_export(job).await?;
    }

    tracing::info!("Seeding complete");
    Ok(())
}
