//! Migrate command - runs pending database migrations and exits

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::storage::{run_storage_migrations, PostgresMigrator};

/// Run all pending migrations
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let pool = crate::connect_database(&config).await?;

    run_storage_migrations(&pool).await?;

    let version = PostgresMigrator::new(pool).current_version().await?;
    info!(version = ?version, "Migrations complete");

    Ok(())
}
