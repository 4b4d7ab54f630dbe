//! Inventory repository trait

use async_trait::async_trait;

use super::entity::{InventorySummary, NewTeamComponent, TeamComponent, TeamId};
use crate::domain::DomainError;

/// Repository for team-owned inventory records
#[async_trait]
pub trait InventoryRepository: Send + Sync + std::fmt::Debug {
    /// Get a record by its numeric ID
    async fn get(&self, id: i64) -> Result<Option<TeamComponent>, DomainError>;

    /// Insert a new record, returning it with its assigned ID
    async fn create(&self, new: NewTeamComponent) -> Result<TeamComponent, DomainError>;

    /// Update an existing record
    async fn update(&self, component: &TeamComponent) -> Result<TeamComponent, DomainError>;

    /// Delete a record, returning whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// List all records owned by a team
    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<TeamComponent>, DomainError>;

    /// Aggregate quantity and record counts for a team
    async fn summary(&self, team_id: &TeamId) -> Result<InventorySummary, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory implementation for testing
    #[derive(Debug, Default)]
    pub struct MockInventoryRepository {
        components: RwLock<HashMap<i64, TeamComponent>>,
        next_id: RwLock<i64>,
    }

    impl MockInventoryRepository {
        pub fn new() -> Self {
            Self {
                components: RwLock::new(HashMap::new()),
                next_id: RwLock::new(1),
            }
        }
    }

    #[async_trait]
    impl InventoryRepository for MockInventoryRepository {
        async fn get(&self, id: i64) -> Result<Option<TeamComponent>, DomainError> {
            let components = self.components.read().unwrap();
            Ok(components.get(&id).cloned())
        }

        async fn create(&self, new: NewTeamComponent) -> Result<TeamComponent, DomainError> {
            let id = {
                let mut next = self.next_id.write().unwrap();
                let id = *next;
                *next += 1;
                id
            };

            let component = TeamComponent::from_parts(
                id,
                new.team_id,
                new.public_component_id,
                new.name,
                new.vendor,
                new.quantity,
                new.location,
                new.notes,
                new.added_by,
                new.image_url,
                new.cad_file_url,
                chrono::Utc::now(),
            );

            let mut components = self.components.write().unwrap();
            components.insert(id, component.clone());
            Ok(component)
        }

        async fn update(
            &self,
            component: &TeamComponent,
        ) -> Result<TeamComponent, DomainError> {
            let mut components = self.components.write().unwrap();

            if !components.contains_key(&component.id()) {
                return Err(DomainError::not_found(format!(
                    "Team component '{}' not found",
                    component.id()
                )));
            }

            components.insert(component.id(), component.clone());
            Ok(component.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            let mut components = self.components.write().unwrap();
            Ok(components.remove(&id).is_some())
        }

        async fn list_for_team(
            &self,
            team_id: &TeamId,
        ) -> Result<Vec<TeamComponent>, DomainError> {
            let components = self.components.read().unwrap();
            let mut results: Vec<TeamComponent> = components
                .values()
                .filter(|c| c.team_id() == team_id)
                .cloned()
                .collect();
            results.sort_by_key(|c| c.id());
            Ok(results)
        }

        async fn summary(&self, team_id: &TeamId) -> Result<InventorySummary, DomainError> {
            let components = self.list_for_team(team_id).await?;

            Ok(InventorySummary {
                team_id: team_id.clone(),
                total_items: components.iter().map(|c| i64::from(c.quantity())).sum(),
                unique_components: components.len() as i64,
            })
        }
    }
}
