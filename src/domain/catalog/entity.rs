//! Public catalog entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_category, validate_component_id, validate_component_name, validate_cost,
    validate_vendor, CatalogValidationError,
};

/// Component identifier - the part number / SKU, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a new ComponentId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogValidationError> {
        let id = id.into();
        validate_component_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentId {
    type Error = CatalogValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability status of a catalog component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OutOfStock,
    Backordered,
    Discontinued,
    #[default]
    Unknown,
}

impl Availability {
    /// All availability states, in display order
    pub const ALL: [Availability; 5] = [
        Self::InStock,
        Self::OutOfStock,
        Self::Backordered,
        Self::Discontinued,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
            Self::Backordered => "backordered",
            Self::Discontinued => "discontinued",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from a stored string, defaulting to Unknown
    pub fn parse(s: &str) -> Self {
        match s {
            "in_stock" => Self::InStock,
            "out_of_stock" => Self::OutOfStock,
            "backordered" => Self::Backordered,
            "discontinued" => Self::Discontinued,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry describing a real FRC part available to all teams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicComponent {
    /// Part number / SKU
    id: ComponentId,
    /// Name of the part
    name: String,
    /// Who makes/sells the part
    vendor: String,
    /// What type of part (Motors, Electronics, etc.)
    category: String,
    /// Price in USD
    cost: f64,
    /// Availability status
    availability: Availability,
    /// Optional URL / item link
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Optional image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    /// Optional CAD file URL
    #[serde(skip_serializing_if = "Option::is_none")]
    cad_file_url: Option<String>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl PublicComponent {
    /// Create a new catalog component
    pub fn new(
        id: ComponentId,
        name: impl Into<String>,
        vendor: impl Into<String>,
        category: impl Into<String>,
        cost: f64,
    ) -> Result<Self, CatalogValidationError> {
        let name = name.into();
        let vendor = vendor.into();
        let category = category.into();

        validate_component_name(&name)?;
        validate_vendor(&vendor)?;
        validate_category(&category)?;
        validate_cost(cost)?;

        let now = Utc::now();

        Ok(Self {
            id,
            name,
            vendor,
            category,
            cost,
            availability: Availability::Unknown,
            source: None,
            description: None,
            image_url: None,
            cad_file_url: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct a component from stored values
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ComponentId,
        name: String,
        vendor: String,
        category: String,
        cost: f64,
        availability: Availability,
        source: Option<String>,
        description: Option<String>,
        image_url: Option<String>,
        cad_file_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            vendor,
            category,
            cost,
            availability,
            source,
            description,
            image_url,
            cad_file_url,
            created_at,
            updated_at,
        }
    }

    // Builder-style setters for optional fields

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_cad_file_url(mut self, url: impl Into<String>) -> Self {
        self.cad_file_url = Some(url.into());
        self
    }

    // Getters

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn cad_file_url(&self) -> Option<&str> {
        self.cad_file_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CatalogValidationError> {
        let name = name.into();
        validate_component_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    pub fn set_vendor(&mut self, vendor: impl Into<String>) -> Result<(), CatalogValidationError> {
        let vendor = vendor.into();
        validate_vendor(&vendor)?;
        self.vendor = vendor;
        self.touch();
        Ok(())
    }

    pub fn set_category(
        &mut self,
        category: impl Into<String>,
    ) -> Result<(), CatalogValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        self.touch();
        Ok(())
    }

    pub fn set_cost(&mut self, cost: f64) -> Result<(), CatalogValidationError> {
        validate_cost(cost)?;
        self.cost = cost;
        self.touch();
        Ok(())
    }

    pub fn set_availability(&mut self, availability: Availability) {
        self.availability = availability;
        self.touch();
    }

    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
        self.touch();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
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
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neo_motor() -> PublicComponent {
        let id = ComponentId::new("REV-21-1650").unwrap();
        PublicComponent::new(id, "NEO Brushless Motor", "REV Robotics", "Motors", 42.0).unwrap()
    }

    #[test]
    fn test_component_id_valid() {
        let id = ComponentId::new("am-0255").unwrap();
        assert_eq!(id.as_str(), "am-0255");
    }

    #[test]
    fn test_component_id_invalid() {
        assert!(ComponentId::new("").is_err());
        assert!(ComponentId::new("-bad").is_err());
        assert!(ComponentId::new("has space").is_err());
    }

    #[test]
    fn test_component_id_serde_round_trip() {
        let id = ComponentId::new("217-3351").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"217-3351\"");

        let parsed: ComponentId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_component_id_serde_rejects_invalid() {
        let result: Result<ComponentId, _> = serde_json::from_str("\"not valid!\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_availability_parse() {
        assert_eq!(Availability::parse("in_stock"), Availability::InStock);
        assert_eq!(Availability::parse("backordered"), Availability::Backordered);
        assert_eq!(Availability::parse("bogus"), Availability::Unknown);
    }

    #[test]
    fn test_availability_round_trip() {
        for availability in Availability::ALL {
            assert_eq!(Availability::parse(availability.as_str()), availability);
        }
    }

    #[test]
    fn test_component_creation() {
        let component = neo_motor();

        assert_eq!(component.name(), "NEO Brushless Motor");
        assert_eq!(component.vendor(), "REV Robotics");
        assert_eq!(component.category(), "Motors");
        assert_eq!(component.cost(), 42.0);
        assert_eq!(component.availability(), Availability::Unknown);
        assert!(component.description().is_none());
    }

    #[test]
    fn test_component_builder_fields() {
        let component = neo_motor()
            .with_availability(Availability::InStock)
            .with_description("Brushless motor with integrated encoder")
            .with_source("https://www.revrobotics.com/rev-21-1650/");

        assert_eq!(component.availability(), Availability::InStock);
        assert_eq!(
            component.description(),
            Some("Brushless motor with integrated encoder")
        );
        assert!(component.source().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_component_invalid_fields() {
        let id = ComponentId::new("x-1").unwrap();
        assert!(PublicComponent::new(id.clone(), "", "Vendor", "Cat", 1.0).is_err());
        assert!(PublicComponent::new(id.clone(), "Name", "", "Cat", 1.0).is_err());
        assert!(PublicComponent::new(id.clone(), "Name", "Vendor", "", 1.0).is_err());
        assert!(PublicComponent::new(id, "Name", "Vendor", "Cat", -5.0).is_err());
    }

    #[test]
    fn test_component_update_touches_timestamp() {
        let mut component = neo_motor();
        let original_updated = component.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        component.set_cost(45.0).unwrap();
        assert_eq!(component.cost(), 45.0);
        assert!(component.updated_at() > original_updated);
    }

    #[test]
    fn test_component_set_invalid_cost_rejected() {
        let mut component = neo_motor();
        assert!(component.set_cost(f64::NAN).is_err());
        assert_eq!(component.cost(), 42.0);
    }

    #[test]
    fn test_optional_fields_omitted_in_serialization() {
        let component = neo_motor();
        let json = serde_json::to_string(&component).unwrap();

        assert!(json.contains("\"id\":\"REV-21-1650\""));
        assert!(json.contains("\"availability\":\"unknown\""));
        // optional fields are omitted entirely when unset
        assert!(!json.contains("cad_file_url"));
    }
}
