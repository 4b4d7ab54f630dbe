//! Catalog infrastructure - PostgreSQL repository and service

mod repository;
mod service;

pub use repository::PostgresCatalogRepository;
pub use service::{CatalogService, CreateComponentRequest, UpdateComponentRequest};
