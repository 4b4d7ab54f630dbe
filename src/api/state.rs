//! Application state for shared services

use std::sync::Arc;

use crate::domain::catalog::{CatalogQuery, CatalogRepository, PublicComponent};
use crate::domain::inventory::{InventoryRepository, InventorySummary, TeamComponent, TeamId};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::{PasswordHasher, TokenService};
use crate::infrastructure::catalog::{
    CatalogService, CreateComponentRequest, UpdateComponentRequest,
};
use crate::infrastructure::inventory::{
    AddComponentRequest, InventoryService, UpdateInventoryRequest,
};
use crate::infrastructure::user::{RegisterUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
    pub inventory_service: Arc<dyn InventoryServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub token_service: Arc<dyn TokenService>,
}

/// Trait for catalog service operations
#[async_trait::async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    async fn get(&self, id: &str) -> Result<PublicComponent, DomainError>;
    async fn list(&self) -> Result<Vec<PublicComponent>, DomainError>;
    async fn search(&self, query: CatalogQuery) -> Result<Vec<PublicComponent>, DomainError>;
    async fn create(&self, request: CreateComponentRequest)
        -> Result<PublicComponent, DomainError>;
    async fn update(
        &self,
        id: &str,
        request: UpdateComponentRequest,
    ) -> Result<PublicComponent, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
    async fn categories(&self) -> Result<Vec<String>, DomainError>;
    async fn vendors(&self) -> Result<Vec<String>, DomainError>;
}

/// Trait for inventory service operations
#[async_trait::async_trait]
pub trait InventoryServiceTrait: Send + Sync {
    async fn add(
        &self,
        team_id: &TeamId,
        request: AddComponentRequest,
    ) -> Result<TeamComponent, DomainError>;
    async fn get(&self, team_id: &TeamId, id: i64) -> Result<TeamComponent, DomainError>;
    async fn update(
        &self,
        team_id: &TeamId,
        id: i64,
        request: UpdateInventoryRequest,
    ) -> Result<TeamComponent, DomainError>;
    async fn remove(&self, team_id: &TeamId, id: i64) -> Result<(), DomainError>;
    async fn list(&self, team_id: &TeamId) -> Result<Vec<TeamComponent>, DomainError>;
    async fn summary(&self, team_id: &TeamId) -> Result<InventorySummary, DomainError>;
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError>;
    async fn get(&self, id: &str) -> Result<User, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: CatalogRepository + 'static> CatalogServiceTrait for CatalogService<R> {
    async fn get(&self, id: &str) -> Result<PublicComponent, DomainError> {
        CatalogService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<PublicComponent>, DomainError> {
        CatalogService::list(self).await
    }

    async fn search(&self, query: CatalogQuery) -> Result<Vec<PublicComponent>, DomainError> {
        CatalogService::search(self, query).await
    }

    async fn create(
        &self,
        request: CreateComponentRequest,
    ) -> Result<PublicComponent, DomainError> {
        CatalogService::create(self, request).await
    }

    async fn update(
        &self,
        id: &str,
        request: UpdateComponentRequest,
    ) -> Result<PublicComponent, DomainError> {
        CatalogService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        CatalogService::delete(self, id).await
    }

    async fn categories(&self) -> Result<Vec<String>, DomainError> {
        CatalogService::categories(self).await
    }

    async fn vendors(&self) -> Result<Vec<String>, DomainError> {
        CatalogService::vendors(self).await
    }
}

#[async_trait::async_trait]
impl<R, C> InventoryServiceTrait for InventoryService<R, C>
where
    R: InventoryRepository + 'static,
    C: CatalogRepository + 'static,
{
    async fn add(
        &self,
        team_id: &TeamId,
        request: AddComponentRequest,
    ) -> Result<TeamComponent, DomainError> {
        InventoryService::add(self, team_id, request).await
    }

    async fn get(&self, team_id: &TeamId, id: i64) -> Result<TeamComponent, DomainError> {
        InventoryService::get(self, team_id, id).await
    }

    async fn update(
        &self,
        team_id: &TeamId,
        id: i64,
        request: UpdateInventoryRequest,
    ) -> Result<TeamComponent, DomainError> {
        InventoryService::update(self, team_id, id, request).await
    }

    async fn remove(&self, team_id: &TeamId, id: i64) -> Result<(), DomainError> {
        InventoryService::remove(self, team_id, id).await
    }

    async fn list(&self, team_id: &TeamId) -> Result<Vec<TeamComponent>, DomainError> {
        InventoryService::list(self, team_id).await
    }

    async fn summary(&self, team_id: &TeamId) -> Result<InventorySummary, DomainError> {
        InventoryService::summary(self, team_id).await
    }
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn get(&self, id: &str) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }
}
