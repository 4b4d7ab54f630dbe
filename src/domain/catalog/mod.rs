//! Public catalog domain module
//!
//! Catalog entries describe real FRC parts, keyed by vendor part number,
//! and are readable by every team.

mod entity;
mod repository;
mod validation;

pub use entity::{Availability, ComponentId, PublicComponent};
pub use repository::{CatalogQuery, CatalogRepository};
pub use validation::{
    validate_category, validate_component_id, validate_component_name, validate_cost,
    validate_vendor, CatalogValidationError,
};

#[cfg(test)]
pub use repository::mock::MockCatalogRepository;
