//! Inventory infrastructure - PostgreSQL repository and service

mod repository;
mod service;

pub use repository::PostgresInventoryRepository;
pub use service::{AddComponentRequest, InventoryService, UpdateInventoryRequest};
