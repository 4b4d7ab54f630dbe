//! User infrastructure - PostgreSQL repository and service

mod repository;
mod service;

pub use repository::PostgresUserRepository;
pub use service::{RegisterUserRequest, UserService};
