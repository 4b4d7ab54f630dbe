//! User repository trait

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository for managing users
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Get a user by ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check if a username is taken
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError>;

    /// Check if an email is taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Record a successful login
    async fn record_login(&self, id: &UserId) -> Result<(), DomainError>;
}
