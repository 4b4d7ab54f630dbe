//! FRC Components API
//!
//! Inventory tracking for FRC robotics teams:
//! - Public parts catalog shared across teams
//! - Per-team inventory with quantities and locations
//! - JWT bearer authentication with team-scoped access

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::postgres::PgPool;

use api::AppState;
use domain::DomainError;
use infrastructure::auth::{Argon2Hasher, JwtConfig, JwtService};
use infrastructure::catalog::{CatalogService, PostgresCatalogRepository};
use infrastructure::inventory::{InventoryService, PostgresInventoryRepository};
use infrastructure::storage::{connect_pool, run_storage_migrations, PostgresConfig};
use infrastructure::user::{PostgresUserRepository, UserService};

/// Read the JWT signing secret; the server refuses to start without it
fn secret_key() -> Result<String, DomainError> {
    std::env::var("SECRET_KEY")
        .map_err(|_| DomainError::configuration("SECRET_KEY environment variable is required"))
}

/// Read the database connection URL from the environment
fn database_url() -> Result<String, DomainError> {
    std::env::var("DATABASE_URL")
        .map_err(|_| DomainError::configuration("DATABASE_URL environment variable is required"))
}

/// Open a connection pool using DATABASE_URL and the configured pool limits
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, DomainError> {
    let postgres_config = PostgresConfig::new(database_url()?)
        .with_max_connections(config.database.max_connections)
        .with_min_connections(config.database.min_connections);

    connect_pool(&postgres_config).await
}

/// Build the application state: connect, migrate, and wire up services
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let secret = secret_key()?;

    let pool = connect_database(config).await?;
    run_storage_migrations(&pool).await?;

    let catalog_repository = Arc::new(PostgresCatalogRepository::new(pool.clone()));
    let inventory_repository = Arc::new(PostgresInventoryRepository::new(pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pool));

    let catalog_service = Arc::new(CatalogService::new(catalog_repository.clone()));
    let inventory_service = Arc::new(InventoryService::new(
        inventory_repository,
        catalog_repository,
    ));
    let user_service = Arc::new(UserService::new(user_repository, Arc::new(Argon2Hasher::new())));

    let token_service = Arc::new(JwtService::new(JwtConfig::new(
        secret,
        config.auth.token_expiration_minutes,
    )));

    Ok(AppState {
        catalog_service,
        inventory_service,
        user_service,
        token_service,
    })
}
