//! Team inventory entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_inventory_name, validate_inventory_vendor, validate_quantity, validate_team_id,
    InventoryValidationError,
};
use crate::domain::catalog::ComponentId;

/// Team identifier - alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, InventoryValidationError> {
        let id = id.into();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = InventoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A team-owned inventory record, optionally linked to a catalog entry
///
/// The numeric id is assigned by the database on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamComponent {
    /// Database-assigned identifier
    id: i64,
    /// Which team owns this record
    team_id: TeamId,
    /// Optional link to a public catalog component
    #[serde(skip_serializing_if = "Option::is_none")]
    public_component_id: Option<ComponentId>,
    /// Name of the component (may differ from the catalog name)
    name: String,
    /// Vendor (may be copied or changed from the catalog)
    vendor: String,
    /// How many the team has
    quantity: i32,
    /// Where it is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    /// Free-form team notes
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    /// Who added it
    #[serde(skip_serializing_if = "Option::is_none")]
    added_by: Option<String>,
    /// Optional team image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    /// Optional team CAD file URL
    #[serde(skip_serializing_if = "Option::is_none")]
    cad_file_url: Option<String>,
    /// Set on insert and on every update
    last_updated: DateTime<Utc>,
}

impl TeamComponent {
    /// Reconstruct a component from stored values
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: i64,
        team_id: TeamId,
        public_component_id: Option<ComponentId>,
        name: String,
        vendor: String,
        quantity: i32,
        location: Option<String>,
        notes: Option<String>,
        added_by: Option<String>,
        image_url: Option<String>,
        cad_file_url: Option<String>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            public_component_id,
            name,
            vendor,
            quantity,
            location,
            notes,
            added_by,
            image_url,
            cad_file_url,
            last_updated,
        }
    }

    // Getters

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn public_component_id(&self) -> Option<&ComponentId> {
        self.public_component_id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn added_by(&self) -> Option<&str> {
        self.added_by.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn cad_file_url(&self) -> Option<&str> {
        self.cad_file_url.as_deref()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), InventoryValidationError> {
        let name = name.into();
        validate_inventory_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    pub fn set_vendor(
        &mut self,
        vendor: impl Into<String>,
    ) -> Result<(), InventoryValidationError> {
        let vendor = vendor.into();
        validate_inventory_vendor(&vendor)?;
        self.vendor = vendor;
        self.touch();
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i32) -> Result<(), InventoryValidationError> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        self.touch();
        Ok(())
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
        self.touch();
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
        self.touch();
    }

    pub fn set_added_by(&mut self, added_by: Option<String>) {
        self.added_by = added_by;
        self.touch();
    }

    pub fn set_image_url(&mut self, url: Option<String>) {
        self.image_url = url;
        self.touch();
    }

    pub fn set_cad_file_url(&mut self, url: Option<String>) {
        self.cad_file_url = url;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

/// Values for inserting a new inventory record; the id comes from the database
#[derive(Debug, Clone)]
pub struct NewTeamComponent {
    pub team_id: TeamId,
    pub public_component_id: Option<ComponentId>,
    pub name: String,
    pub vendor: String,
    pub quantity: i32,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub added_by: Option<String>,
    pub image_url: Option<String>,
    pub cad_file_url: Option<String>,
}

impl NewTeamComponent {
    /// Validate all required fields
    pub fn validate(&self) -> Result<(), InventoryValidationError> {
        validate_inventory_name(&self.name)?;
        validate_inventory_vendor(&self.vendor)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

/// Aggregate counts for a team's inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub team_id: TeamId,
    /// Sum of quantities across all records
    pub total_items: i64,
    /// Number of distinct inventory records
    pub unique_components: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spare_neo(team: &str) -> TeamComponent {
        TeamComponent::from_parts(
            1,
            TeamId::new(team).unwrap(),
            Some(ComponentId::new("REV-21-1650").unwrap()),
            "Spare NEO".to_string(),
            "REV Robotics".to_string(),
            3,
            Some("Bin 4".to_string()),
            None,
            Some("alex".to_string()),
            None,
            None,
            Utc::now(),
        )
    }

    #[test]
    fn test_team_id_valid() {
        let id = TeamId::new("frc-254").unwrap();
        assert_eq!(id.as_str(), "frc-254");
    }

    #[test]
    fn test_team_id_invalid() {
        assert!(TeamId::new("").is_err());
        assert!(TeamId::new("-254").is_err());
        assert!(TeamId::new("team 254").is_err());
    }

    #[test]
    fn test_component_getters() {
        let component = spare_neo("254");

        assert_eq!(component.id(), 1);
        assert_eq!(component.team_id().as_str(), "254");
        assert_eq!(
            component.public_component_id().unwrap().as_str(),
            "REV-21-1650"
        );
        assert_eq!(component.quantity(), 3);
        assert_eq!(component.location(), Some("Bin 4"));
        assert_eq!(component.added_by(), Some("alex"));
    }

    #[test]
    fn test_quantity_update() {
        let mut component = spare_neo("254");
        let before = component.last_updated();

        std::thread::sleep(std::time::Duration::from_millis(10));

        component.set_quantity(5).unwrap();
        assert_eq!(component.quantity(), 5);
        assert!(component.last_updated() > before);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut component = spare_neo("254");
        assert!(component.set_quantity(-1).is_err());
        assert_eq!(component.quantity(), 3);
    }

    #[test]
    fn test_new_component_validation() {
        let new = NewTeamComponent {
            team_id: TeamId::new("1678").unwrap(),
            public_component_id: None,
            name: "Custom gearbox plate".to_string(),
            vendor: "in-house".to_string(),
            quantity: 2,
            location: None,
            notes: None,
            added_by: None,
            image_url: None,
            cad_file_url: None,
        };

        assert!(new.validate().is_ok());

        let bad = NewTeamComponent {
            quantity: -4,
            ..new
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_summary_serialization() {
        let summary = InventorySummary {
            team_id: TeamId::new("254").unwrap(),
            total_items: 17,
            unique_components: 5,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"team_id\":\"254\""));
        assert!(json.contains("\"total_items\":17"));
        assert!(json.contains("\"unique_components\":5"));
    }
}
