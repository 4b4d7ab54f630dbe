//! Domain layer - Core entities, validation, and repository traits

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod user;

pub use catalog::{Availability, CatalogQuery, CatalogRepository, ComponentId, PublicComponent};
pub use error::DomainError;
pub use inventory::{
    InventoryRepository, InventorySummary, NewTeamComponent, TeamComponent, TeamId,
};
pub use user::{User, UserId, UserRepository, UserStatus};
