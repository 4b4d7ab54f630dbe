//! Team inventory domain module
//!
//! Inventory records belong to exactly one team and may reference a public
//! catalog entry. Access is scoped to the owning team.

mod entity;
mod repository;
mod validation;

pub use entity::{InventorySummary, NewTeamComponent, TeamComponent, TeamId};
pub use repository::InventoryRepository;
pub use validation::{
    validate_inventory_name, validate_inventory_vendor, validate_quantity, validate_team_id,
    InventoryValidationError,
};

#[cfg(test)]
pub use repository::mock::MockInventoryRepository;
