//! Inventory service for team-owned component records

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::catalog::{CatalogRepository, ComponentId};
use crate::domain::inventory::{
    InventoryRepository, InventorySummary, NewTeamComponent, TeamComponent, TeamId,
};
use crate::domain::DomainError;

/// Request for adding a component to a team's inventory
#[derive(Debug, Clone)]
pub struct AddComponentRequest {
    pub public_component_id: Option<String>,
    pub name: String,
    pub vendor: String,
    pub quantity: i32,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub added_by: Option<String>,
    pub image_url: Option<String>,
    pub cad_file_url: Option<String>,
}

/// Request for partially updating an inventory record
///
/// Fields left as None are not touched. A request with no fields set
/// is rejected.
#[derive(Debug, Clone, Default)]
pub struct UpdateInventoryRequest {
    pub name: Option<String>,
    pub vendor: Option<String>,
    pub quantity: Option<i32>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub cad_file_url: Option<String>,
}

impl UpdateInventoryRequest {
    /// True when the request carries no changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.vendor.is_none()
            && self.quantity.is_none()
            && self.location.is_none()
            && self.notes.is_none()
            && self.image_url.is_none()
            && self.cad_file_url.is_none()
    }
}

/// Inventory service scoping every operation to the owning team
#[derive(Debug)]
pub struct InventoryService<R: InventoryRepository, C: CatalogRepository> {
    repository: Arc<R>,
    catalog: Arc<C>,
}

impl<R: InventoryRepository, C: CatalogRepository> InventoryService<R, C> {
    /// Create a new inventory service
    pub fn new(repository: Arc<R>, catalog: Arc<C>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Add a component to a team's inventory
    pub async fn add(
        &self,
        team_id: &TeamId,
        request: AddComponentRequest,
    ) -> Result<TeamComponent, DomainError> {
        info!(team_id = %team_id, name = %request.name, "Adding inventory record");

        let public_component_id = match request.public_component_id {
            Some(id) => {
                let component_id =
                    ComponentId::new(&id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

                if !self.catalog.exists(&component_id).await? {
                    return Err(DomainError::validation(format!(
                        "Public component '{}' does not exist",
                        id
                    )));
                }

                Some(component_id)
            }
            None => None,
        };

        let new = NewTeamComponent {
            team_id: team_id.clone(),
            public_component_id,
            name: request.name,
            vendor: request.vendor,
            quantity: request.quantity,
            location: request.location,
            notes: request.notes,
            added_by: request.added_by,
            image_url: request.image_url,
            cad_file_url: request.cad_file_url,
        };

        new.validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.create(new).await
    }

    /// Get a record, verifying it belongs to the requesting team
    pub async fn get(&self, team_id: &TeamId, id: i64) -> Result<TeamComponent, DomainError> {
        let component = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team component '{}' not found", id)))?;

        self.check_ownership(team_id, &component)?;

        Ok(component)
    }

    /// Partially update a record owned by the requesting team
    pub async fn update(
        &self,
        team_id: &TeamId,
        id: i64,
        request: UpdateInventoryRequest,
    ) -> Result<TeamComponent, DomainError> {
        info!(team_id = %team_id, id = id, "Updating inventory record");

        if request.is_empty() {
            return Err(DomainError::validation("No valid fields to update"));
        }

        let mut component = self.get(team_id, id).await?;

        if let Some(name) = request.name {
            component
                .set_name(name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }
        if let Some(vendor) = request.vendor {
            component
                .set_vendor(vendor)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }
        if let Some(quantity) = request.quantity {
            component
                .set_quantity(quantity)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }
        if request.location.is_some() {
            component.set_location(request.location);
        }
        if request.notes.is_some() {
            component.set_notes(request.notes);
        }
        if request.image_url.is_some() {
            component.set_image_url(request.image_url);
        }
        if request.cad_file_url.is_some() {
            component.set_cad_file_url(request.cad_file_url);
        }

        self.repository.update(&component).await
    }

    /// Delete a record owned by the requesting team
    pub async fn remove(&self, team_id: &TeamId, id: i64) -> Result<(), DomainError> {
        info!(team_id = %team_id, id = id, "Deleting inventory record");

        // Ownership check before delete
        self.get(team_id, id).await?;

        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(DomainError::not_found(format!(
                "Team component '{}' not found",
                id
            )));
        }

        Ok(())
    }

    /// List all records owned by a team
    pub async fn list(&self, team_id: &TeamId) -> Result<Vec<TeamComponent>, DomainError> {
        debug!(team_id = %team_id, "Listing team inventory");
        self.repository.list_for_team(team_id).await
    }

    /// Aggregate counts for a team's inventory
    pub async fn summary(&self, team_id: &TeamId) -> Result<InventorySummary, DomainError> {
        self.repository.summary(team_id).await
    }

    fn check_ownership(
        &self,
        team_id: &TeamId,
        component: &TeamComponent,
    ) -> Result<(), DomainError> {
        if component.team_id() != team_id {
            return Err(DomainError::forbidden(
                "Component belongs to a different team",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{MockCatalogRepository, PublicComponent};
    use crate::domain::inventory::MockInventoryRepository;

    async fn service_with_catalog() -> InventoryService<MockInventoryRepository, MockCatalogRepository>
    {
        let catalog = Arc::new(MockCatalogRepository::new());

        let neo = PublicComponent::new(
            ComponentId::new("REV-21-1650").unwrap(),
            "NEO Brushless Motor",
            "REV Robotics",
            "Motors",
            42.0,
        )
        .unwrap();
        catalog.create(neo).await.unwrap();

        InventoryService::new(Arc::new(MockInventoryRepository::new()), catalog)
    }

    fn add_request() -> AddComponentRequest {
        AddComponentRequest {
            public_component_id: Some("REV-21-1650".to_string()),
            name: "Spare NEO".to_string(),
            vendor: "REV Robotics".to_string(),
            quantity: 3,
            location: Some("Bin 4".to_string()),
            notes: None,
            added_by: Some("alex".to_string()),
            image_url: None,
            cad_file_url: None,
        }
    }

    fn team(id: &str) -> TeamId {
        TeamId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let service = service_with_catalog().await;
        let team_id = team("254");

        let created = service.add(&team_id, add_request()).await.unwrap();
        assert_eq!(created.team_id().as_str(), "254");
        assert_eq!(created.quantity(), 3);

        let fetched = service.get(&team_id, created.id()).await.unwrap();
        assert_eq!(fetched.name(), "Spare NEO");
    }

    #[tokio::test]
    async fn test_add_dangling_catalog_link_rejected() {
        let service = service_with_catalog().await;

        let mut request = add_request();
        request.public_component_id = Some("am-9999".to_string());

        let result = service.add(&team("254"), request).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_add_without_catalog_link() {
        let service = service_with_catalog().await;

        let mut request = add_request();
        request.public_component_id = None;
        request.name = "Custom gearbox plate".to_string();
        request.vendor = "in-house".to_string();

        let created = service.add(&team("1678"), request).await.unwrap();
        assert!(created.public_component_id().is_none());
    }

    #[tokio::test]
    async fn test_add_negative_quantity_rejected() {
        let service = service_with_catalog().await;

        let mut request = add_request();
        request.quantity = -1;

        let result = service.add(&team("254"), request).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_cross_team_access_forbidden() {
        let service = service_with_catalog().await;

        let created = service.add(&team("254"), add_request()).await.unwrap();

        let result = service.get(&team("1678"), created.id()).await;
        assert!(matches!(result, Err(DomainError::Forbidden { .. })));

        let result = service.remove(&team("1678"), created.id()).await;
        assert!(matches!(result, Err(DomainError::Forbidden { .. })));

        // the owner still sees it
        assert!(service.get(&team("254"), created.id()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_partial() {
        let service = service_with_catalog().await;
        let team_id = team("254");

        let created = service.add(&team_id, add_request()).await.unwrap();

        let request = UpdateInventoryRequest {
            quantity: Some(5),
            location: Some("Shelf A".to_string()),
            ..Default::default()
        };

        let updated = service.update(&team_id, created.id(), request).await.unwrap();

        assert_eq!(updated.quantity(), 5);
        assert_eq!(updated.location(), Some("Shelf A"));
        assert_eq!(updated.name(), "Spare NEO");
    }

    #[tokio::test]
    async fn test_update_empty_rejected() {
        let service = service_with_catalog().await;
        let team_id = team("254");

        let created = service.add(&team_id, add_request()).await.unwrap();

        let result = service
            .update(&team_id, created.id(), UpdateInventoryRequest::default())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_remove() {
        let service = service_with_catalog().await;
        let team_id = team("254");

        let created = service.add(&team_id, add_request()).await.unwrap();
        service.remove(&team_id, created.id()).await.unwrap();

        let result = service.get(&team_id, created.id()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_and_summary() {
        let service = service_with_catalog().await;
        let team_id = team("254");

        service.add(&team_id, add_request()).await.unwrap();

        let mut second = add_request();
        second.public_component_id = None;
        second.name = "Battery".to_string();
        second.vendor = "MK Battery".to_string();
        second.quantity = 7;
        service.add(&team_id, second).await.unwrap();

        // another team's records stay invisible
        service.add(&team("1678"), add_request()).await.unwrap();

        let records = service.list(&team_id).await.unwrap();
        assert_eq!(records.len(), 2);

        let summary = service.summary(&team_id).await.unwrap();
        assert_eq!(summary.total_items, 10);
        assert_eq!(summary.unique_components, 2);
    }
}
