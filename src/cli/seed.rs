//! Seed command - populates the public catalog with default parts

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::catalog::PostgresCatalogRepository;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::seed::seed_catalog;
use crate::infrastructure::storage::run_storage_migrations;

/// Seed the catalog, running migrations first
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let pool = crate::connect_database(&config).await?;
    run_storage_migrations(&pool).await?;

    let repository = PostgresCatalogRepository::new(pool);
    let inserted = seed_catalog(&repository).await?;

    info!(inserted = inserted, "Seed finished");

    Ok(())
}
