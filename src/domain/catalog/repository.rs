//! Catalog repository trait

use async_trait::async_trait;

use super::entity::{ComponentId, PublicComponent};
use crate::domain::DomainError;

/// Filter parameters for searching the public catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring match against name and description
    pub text: Option<String>,
    /// Case-insensitive substring match against category
    pub category: Option<String>,
    /// Case-insensitive substring match against vendor
    pub vendor: Option<String>,
    /// Inclusive lower cost bound
    pub min_cost: Option<f64>,
    /// Inclusive upper cost bound
    pub max_cost: Option<f64>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_min_cost(mut self, min_cost: f64) -> Self {
        self.min_cost = Some(min_cost);
        self
    }

    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.category.is_none()
            && self.vendor.is_none()
            && self.min_cost.is_none()
            && self.max_cost.is_none()
    }
}

/// Repository for the public parts catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync + std::fmt::Debug {
    /// Get a component by ID
    async fn get(&self, id: &ComponentId) -> Result<Option<PublicComponent>, DomainError>;

    /// Create a new component
    async fn create(&self, component: PublicComponent) -> Result<PublicComponent, DomainError>;

    /// Update an existing component
    async fn update(&self, component: PublicComponent) -> Result<PublicComponent, DomainError>;

    /// Delete a component by ID, returning whether a row was removed
    async fn delete(&self, id: &ComponentId) -> Result<bool, DomainError>;

    /// List all components
    async fn list(&self) -> Result<Vec<PublicComponent>, DomainError>;

    /// Search components matching the query filters
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<PublicComponent>, DomainError>;

    /// Check if a component exists
    async fn exists(&self, id: &ComponentId) -> Result<bool, DomainError>;

    /// Distinct categories present in the catalog
    async fn categories(&self) -> Result<Vec<String>, DomainError>;

    /// Distinct vendors present in the catalog
    async fn vendors(&self) -> Result<Vec<String>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory implementation for testing
    #[derive(Debug, Default)]
    pub struct MockCatalogRepository {
        components: RwLock<HashMap<String, PublicComponent>>,
    }

    impl MockCatalogRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    fn contains_ci(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    #[async_trait]
    impl CatalogRepository for MockCatalogRepository {
        async fn get(&self, id: &ComponentId) -> Result<Option<PublicComponent>, DomainError> {
            let components = self.components.read().unwrap();
            Ok(components.get(id.as_str()).cloned())
        }

        async fn create(
            &self,
            component: PublicComponent,
        ) -> Result<PublicComponent, DomainError> {
            let mut components = self.components.write().unwrap();

            if components.contains_key(component.id().as_str()) {
                return Err(DomainError::conflict(format!(
                    "Component '{}' already exists",
                    component.id()
                )));
            }

            components.insert(component.id().as_str().to_string(), component.clone());
            Ok(component)
        }

        async fn update(
            &self,
            component: PublicComponent,
        ) -> Result<PublicComponent, DomainError> {
            let mut components = self.components.write().unwrap();

            if !components.contains_key(component.id().as_str()) {
                return Err(DomainError::not_found(format!(
                    "Component '{}' not found",
                    component.id()
                )));
            }

            components.insert(component.id().as_str().to_string(), component.clone());
            Ok(component)
        }

        async fn delete(&self, id: &ComponentId) -> Result<bool, DomainError> {
            let mut components = self.components.write().unwrap();
            Ok(components.remove(id.as_str()).is_some())
        }

        async fn list(&self) -> Result<Vec<PublicComponent>, DomainError> {
            let components = self.components.read().unwrap();
            let mut all: Vec<PublicComponent> = components.values().cloned().collect();
            all.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
            Ok(all)
        }

        async fn search(
            &self,
            query: &CatalogQuery,
        ) -> Result<Vec<PublicComponent>, DomainError> {
            let mut results = self.list().await?;

            if let Some(text) = &query.text {
                results.retain(|c| {
                    contains_ci(c.name(), text)
                        || c.description().is_some_and(|d| contains_ci(d, text))
                });
            }
            if let Some(category) = &query.category {
                results.retain(|c| contains_ci(c.category(), category));
            }
            if let Some(vendor) = &query.vendor {
                results.retain(|c| contains_ci(c.vendor(), vendor));
            }
            if let Some(min_cost) = query.min_cost {
                results.retain(|c| c.cost() >= min_cost);
            }
            if let Some(max_cost) = query.max_cost {
                results.retain(|c| c.cost() <= max_cost);
            }

            Ok(results)
        }

        async fn exists(&self, id: &ComponentId) -> Result<bool, DomainError> {
            let components = self.components.read().unwrap();
            Ok(components.contains_key(id.as_str()))
        }

        async fn categories(&self) -> Result<Vec<String>, DomainError> {
            let components = self.components.read().unwrap();
            let mut categories: Vec<String> =
                components.values().map(|c| c.category().to_string()).collect();
            categories.sort();
            categories.dedup();
            Ok(categories)
        }

        async fn vendors(&self) -> Result<Vec<String>, DomainError> {
            let components = self.components.read().unwrap();
            let mut vendors: Vec<String> =
                components.values().map(|c| c.vendor().to_string()).collect();
            vendors.sort();
            vendors.dedup();
            Ok(vendors)
        }
    }
}
