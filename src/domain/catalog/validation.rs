//! Catalog validation utilities

use thiserror::Error;

/// Errors that can occur during catalog validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogValidationError {
    #[error("Component ID cannot be empty")]
    EmptyId,

    #[error("Component ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Component ID must start with a letter or number")]
    InvalidIdStart,

    #[error("Component ID must end with a letter or number")]
    InvalidIdEnd,

    #[error("Component ID contains invalid character: '{0}'. Only alphanumeric characters, hyphens, underscores, and dots are allowed")]
    InvalidIdCharacter(char),

    #[error("Component name cannot be empty")]
    EmptyName,

    #[error("Component name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Vendor cannot be empty")]
    EmptyVendor,

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Cost must be a finite, non-negative number")]
    InvalidCost,
}

const MAX_COMPONENT_ID_LENGTH: usize = 64;
const MAX_NAME_LENGTH: usize = 200;

/// Validate a component ID (part number / SKU)
///
/// Rules:
/// - Cannot be empty
/// - Maximum 64 characters
/// - Only alphanumeric characters, hyphens, underscores, and dots
/// - Must start and end with alphanumeric
pub fn validate_component_id(id: &str) -> Result<(), CatalogValidationError> {
    if id.is_empty() {
        return Err(CatalogValidationError::EmptyId);
    }

    if id.len() > MAX_COMPONENT_ID_LENGTH {
        return Err(CatalogValidationError::IdTooLong(MAX_COMPONENT_ID_LENGTH));
    }

    let chars: Vec<char> = id.chars().collect();

    if !chars[0].is_ascii_alphanumeric() {
        return Err(CatalogValidationError::InvalidIdStart);
    }

    if !chars[chars.len() - 1].is_ascii_alphanumeric() {
        return Err(CatalogValidationError::InvalidIdEnd);
    }

    for c in &chars {
        if !c.is_ascii_alphanumeric() && *c != '-' && *c != '_' && *c != '.' {
            return Err(CatalogValidationError::InvalidIdCharacter(*c));
        }
    }

    Ok(())
}

/// Validate a component name
pub fn validate_component_name(name: &str) -> Result<(), CatalogValidationError> {
    if name.trim().is_empty() {
        return Err(CatalogValidationError::EmptyName);
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(CatalogValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a vendor name
pub fn validate_vendor(vendor: &str) -> Result<(), CatalogValidationError> {
    if vendor.trim().is_empty() {
        return Err(CatalogValidationError::EmptyVendor);
    }

    Ok(())
}

/// Validate a category name
pub fn validate_category(category: &str) -> Result<(), CatalogValidationError> {
    if category.trim().is_empty() {
        return Err(CatalogValidationError::EmptyCategory);
    }

    Ok(())
}

/// Validate a component cost
pub fn validate_cost(cost: f64) -> Result<(), CatalogValidationError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(CatalogValidationError::InvalidCost);
    }

    Ok(())
}
