//! Inventory validation utilities

use thiserror::Error;

/// Errors that can occur during inventory validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryValidationError {
    #[error("Team ID cannot be empty")]
    EmptyTeamId,

    #[error("Team ID exceeds maximum length of {0} characters")]
    TeamIdTooLong(usize),

    #[error("Team ID must start with a letter or number")]
    InvalidTeamIdStart,

    #[error("Team ID must end with a letter or number")]
    InvalidTeamIdEnd,

    #[error("Team ID contains invalid character: '{0}'. Only alphanumeric characters and hyphens are allowed")]
    InvalidTeamIdCharacter(char),

    #[error("Component name cannot be empty")]
    EmptyName,

    #[error("Vendor cannot be empty")]
    EmptyVendor,

    #[error("Quantity cannot be negative")]
    NegativeQuantity,
}

const MAX_TEAM_ID_LENGTH: usize = 50;

/// Validate a team ID
///
/// Rules:
/// - Cannot be empty
/// - Maximum 50 characters
/// - Only alphanumeric characters and hyphens
/// - Must start and end with alphanumeric
pub fn validate_team_id(id: &str) -> Result<(), InventoryValidationError> {
    if id.is_empty() {
        return Err(InventoryValidationError::EmptyTeamId);
    }

    if id.len() > MAX_TEAM_ID_LENGTH {
        return Err(InventoryValidationError::TeamIdTooLong(MAX_TEAM_ID_LENGTH));
    }

    let chars: Vec<char> = id.chars().collect();

    if !chars[0].is_ascii_alphanumeric() {
        return Err(InventoryValidationError::InvalidTeamIdStart);
    }

    if !chars[chars.len() - 1].is_ascii_alphanumeric() {
        return Err(InventoryValidationError::InvalidTeamIdEnd);
    }

    for c in &chars {
        if !c.is_ascii_alphanumeric() && *c != '-' {
            return Err(InventoryValidationError::InvalidTeamIdCharacter(*c));
        }
    }

    Ok(())
}

/// Validate an inventory component name
pub fn validate_inventory_name(name: &str) -> Result<(), InventoryValidationError> {
    if name.trim().is_empty() {
        return Err(InventoryValidationError::EmptyName);
    }

    Ok(())
}

/// Validate an inventory vendor
pub fn validate_inventory_vendor(vendor: &str) -> Result<(), InventoryValidationError> {
    if vendor.trim().is_empty() {
        return Err(InventoryValidationError::EmptyVendor);
    }

    Ok(())
}

/// Validate an inventory quantity
pub fn validate_quantity(quantity: i32) -> Result<(), InventoryValidationError> {
    if quantity < 0 {
        return Err(InventoryValidationError::NegativeQuantity);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_ids() {
        assert!(validate_team_id("254").is_ok());
        assert!(validate_team_id("frc-1678").is_ok());
        assert!(validate_team_id("team-00").is_ok());
    }

    #[test]
    fn test_invalid_team_ids() {
        assert!(validate_team_id("").is_err());
        assert!(validate_team_id("-254").is_err());
        assert!(validate_team_id("254-").is_err());
        assert!(validate_team_id("team_254").is_err());
        assert!(validate_team_id(&"9".repeat(51)).is_err());
    }

    #[test]
    fn test_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(12).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_name_and_vendor() {
        assert!(validate_inventory_name("Spare NEO").is_ok());
        assert!(validate_inventory_name("  ").is_err());
        assert!(validate_inventory_vendor("AndyMark").is_ok());
        assert!(validate_inventory_vendor("").is_err());
    }
}
