//! Catalog service for managing the public parts catalog

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::catalog::{
    Availability, CatalogQuery, CatalogRepository, ComponentId, PublicComponent,
};
use crate::domain::DomainError;

/// Request for creating a new catalog component
#[derive(Debug, Clone)]
pub struct CreateComponentRequest {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub category: String,
    pub cost: f64,
    pub availability: Option<Availability>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub cad_file_url: Option<String>,
}

/// Request for partially updating a catalog component
///
/// Fields left as None are not touched. A request with no fields set
/// is rejected.
#[derive(Debug, Clone, Default)]
pub struct UpdateComponentRequest {
    pub name: Option<String>,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub cost: Option<f64>,
    pub availability: Option<Availability>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub cad_file_url: Option<String>,
}

impl UpdateComponentRequest {
    /// True when the request carries no changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.vendor.is_none()
            && self.category.is_none()
            && self.cost.is_none()
            && self.availability.is_none()
            && self.source.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.cad_file_url.is_none()
    }
}

/// Catalog service for managing public components
#[derive(Debug)]
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Create a new catalog service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new catalog component
    pub async fn create(&self, request: CreateComponentRequest) -> Result<PublicComponent, DomainError> {
        info!(id = %request.id, name = %request.name, "Creating catalog component");

        let component_id =
            ComponentId::new(&request.id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if self.repository.exists(&component_id).await? {
            return Err(DomainError::conflict(format!(
                "Component '{}' already exists",
                request.id
            )));
        }

        let mut component = PublicComponent::new(
            component_id,
            request.name,
            request.vendor,
            request.category,
            request.cost,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(availability) = request.availability {
            component.set_availability(availability);
        }
        if request.source.is_some() {
            component.set_source(request.source);
        }
        if request.description.is_some() {
            component.set_description(request.description);
        }
        if request.image_url.is_some() {
            component.set_image_url(request.image_url);
        }
        if request.cad_file_url.is_some() {
            component.set_cad_file_url(request.cad_file_url);
        }

        self.repository.create(component).await
    }

    /// Get a component by ID
    pub async fn get(&self, id: &str) -> Result<PublicComponent, DomainError> {
        let component_id =
            ComponentId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        self.repository
            .get(&component_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Component '{}' not found", id)))
    }

    /// List all catalog components
    pub async fn list(&self) -> Result<Vec<PublicComponent>, DomainError> {
        self.repository.list().await
    }

    /// Search the catalog with the given filters
    pub async fn search(&self, query: CatalogQuery) -> Result<Vec<PublicComponent>, DomainError> {
        debug!(?query, "Searching catalog");

        if query.is_empty() {
            return self.repository.list().await;
        }

        self.repository.search(&query).await
    }

    /// Partially update a component
    pub async fn update(
        &self,
        id: &str,
        request: UpdateComponentRequest,
    ) -> Result<PublicComponent, DomainError> {
        info!(id = %id, "Updating catalog component");

        if request.is_empty() {
            return Err(DomainError::validation("No valid fields to update"));
        }

        let component_id =
            ComponentId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut component = self
            .repository
            .get(&component_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Component '{}' not found", id)))?;

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
        if let Some(category) = request.category {
            component
                .set_category(category)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }
        if let Some(cost) = request.cost {
            component
                .set_cost(cost)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }
        if let Some(availability) = request.availability {
            component.set_availability(availability);
        }
        if request.source.is_some() {
            component.set_source(request.source);
        }
        if request.description.is_some() {
            component.set_description(request.description);
        }
        if request.image_url.is_some() {
            component.set_image_url(request.image_url);
        }
        if request.cad_file_url.is_some() {
            component.set_cad_file_url(request.cad_file_url);
        }

        self.repository.update(component).await
    }

    /// Delete a component by ID
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        info!(id = %id, "Deleting catalog component");

        let component_id =
            ComponentId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let deleted = self.repository.delete(&component_id).await?;

        if !deleted {
            return Err(DomainError::not_found(format!(
                "Component '{}' not found",
                id
            )));
        }

        Ok(())
    }

    /// Distinct categories present in the catalog
    pub async fn categories(&self) -> Result<Vec<String>, DomainError> {
        self.repository.categories().await
    }

    /// Distinct vendors present in the catalog
    pub async fn vendors(&self) -> Result<Vec<String>, DomainError> {
        self.repository.vendors().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MockCatalogRepository;

    fn service() -> CatalogService<MockCatalogRepository> {
        CatalogService::new(Arc::new(MockCatalogRepository::new()))
    }

    fn neo_request() -> CreateComponentRequest {
        CreateComponentRequest {
            id: "REV-21-1650".to_string(),
            name: "NEO Brushless Motor".to_string(),
            vendor: "REV Robotics".to_string(),
            category: "Motors".to_string(),
            cost: 42.0,
            availability: Some(Availability::InStock),
            source: Some("https://www.revrobotics.com/rev-21-1650/".to_string()),
            description: Some("Brushless motor with integrated encoder".to_string()),
            image_url: None,
            cad_file_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();

        let created = service.create(neo_request()).await.unwrap();
        assert_eq!(created.name(), "NEO Brushless Motor");
        assert_eq!(created.availability(), Availability::InStock);

        let fetched = service.get("REV-21-1650").await.unwrap();
        assert_eq!(fetched.id().as_str(), "REV-21-1650");
        assert_eq!(fetched.cost(), 42.0);
    }

    #[tokio::test]
    async fn test_create_duplicate_conflict() {
        let service = service();

        service.create(neo_request()).await.unwrap();
        let result = service.create(neo_request()).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_invalid_id() {
        let service = service();

        let mut request = neo_request();
        request.id = "has spaces".to_string();

        let result = service.create(request).await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let service = service();

        let result = service.get("am-0255").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_partial() {
        let service = service();
        service.create(neo_request()).await.unwrap();

        let request = UpdateComponentRequest {
            cost: Some(48.0),
            availability: Some(Availability::Backordered),
            ..Default::default()
        };

        let updated = service.update("REV-21-1650", request).await.unwrap();

        assert_eq!(updated.cost(), 48.0);
        assert_eq!(updated.availability(), Availability::Backordered);
        // untouched fields keep their values
        assert_eq!(updated.name(), "NEO Brushless Motor");
    }

    #[tokio::test]
    async fn test_update_empty_rejected() {
        let service = service();
        service.create(neo_request()).await.unwrap();

        let result = service
            .update("REV-21-1650", UpdateComponentRequest::default())
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let service = service();

        let request = UpdateComponentRequest {
            cost: Some(10.0),
            ..Default::default()
        };

        let result = service.update("am-0255", request).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        service.create(neo_request()).await.unwrap();

        service.delete("REV-21-1650").await.unwrap();

        let result = service.get("REV-21-1650").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        let result = service.delete("REV-21-1650").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_search_filters() {
        let service = service();
        service.create(neo_request()).await.unwrap();

        let mut cim = neo_request();
        cim.id = "am-0255".to_string();
        cim.name = "CIM Motor".to_string();
        cim.vendor = "AndyMark".to_string();
        cim.cost = 29.99;
        service.create(cim).await.unwrap();

        let results = service
            .search(CatalogQuery::new().with_text("neo"))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id().as_str(), "REV-21-1650");

        let results = service
            .search(CatalogQuery::new().with_vendor("andymark"))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);

        let results = service
            .search(CatalogQuery::new().with_max_cost(30.0))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id().as_str(), "am-0255");

        // empty query falls back to full list
        let results = service.search(CatalogQuery::new()).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_categories_and_vendors() {
        let service = service();
        service.create(neo_request()).await.unwrap();

        let mut cim = neo_request();
        cim.id = "am-0255".to_string();
        cim.vendor = "AndyMark".to_string();
        service.create(cim).await.unwrap();

        let categories = service.categories().await.unwrap();
        assert_eq!(categories, vec!["Motors".to_string()]);

        let vendors = service.vendors().await.unwrap();
        assert_eq!(
            vendors,
            vec!["AndyMark".to_string(), "REV Robotics".to_string()]
        );
    }
}
