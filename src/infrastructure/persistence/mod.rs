mod pg_pool;
mod repositories;

pub use pg_pool::{ConnectRetry, create_pool, run_migrations};
pub use repositories::{InMemoryJobRepository, PgJobRepository};
