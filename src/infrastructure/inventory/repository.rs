//! PostgreSQL inventory repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::catalog::ComponentId;
use crate::domain::inventory::{
    InventorySummary, InventoryRepository, NewTeamComponent, TeamComponent, TeamId,
};
use crate::domain::DomainError;

/// PostgreSQL implementation of InventoryRepository
#[derive(Debug, Clone)]
pub struct PostgresInventoryRepository {
    pool: PgPool,
}

impl PostgresInventoryRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INVENTORY_COLUMNS: &str = "id, team_id, public_component_id, name, vendor, quantity, \
     location, notes, added_by, image_url, cad_file_url, last_updated";

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn get(&self, id: i64) -> Result<Option<TeamComponent>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM team_components WHERE id = $1",
            INVENTORY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team component: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_team_component(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new: NewTeamComponent) -> Result<TeamComponent, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO team_components
                (team_id, public_component_id, name, vendor, quantity,
                 location, notes, added_by, image_url, cad_file_url, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
            RETURNING {}
            "#,
            INVENTORY_COLUMNS
        ))
        .bind(new.team_id.as_str())
        .bind(new.public_component_id.as_ref().map(|id| id.as_str()))
        .bind(&new.name)
        .bind(&new.vendor)
        .bind(new.quantity)
        .bind(&new.location)
        .bind(&new.notes)
        .bind(&new.added_by)
        .bind(&new.image_url)
        .bind(&new.cad_file_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("foreign key") {
                DomainError::validation(format!(
                    "Public component '{}' does not exist",
                    new.public_component_id
                        .as_ref()
                        .map(|id| id.as_str())
                        .unwrap_or("")
                ))
            } else {
                DomainError::storage(format!("Failed to create team component: {}", e))
            }
        })?;

        row_to_team_component(&row)
    }

    async fn update(&self, component: &TeamComponent) -> Result<TeamComponent, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE team_components
            SET name = $2, vendor = $3, quantity = $4, location = $5, notes = $6,
                added_by = $7, image_url = $8, cad_file_url = $9, last_updated = $10
            WHERE id = $1
            "#,
        )
        .bind(component.id())
        .bind(component.name())
        .bind(component.vendor())
        .bind(component.quantity())
        .bind(component.location())
        .bind(component.notes())
        .bind(component.added_by())
        .bind(component.image_url())
        .bind(component.cad_file_url())
        .bind(component.last_updated())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update team component: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Team component '{}' not found",
                component.id()
            )));
        }

        Ok(component.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM team_components WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete team component: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<TeamComponent>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM team_components WHERE team_id = $1 ORDER BY id",
            INVENTORY_COLUMNS
        ))
        .bind(team_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list team components: {}", e)))?;

        let mut components = Vec::with_capacity(rows.len());

        for row in rows {
            components.push(row_to_team_component(&row)?);
        }

        Ok(components)
    }

    async fn summary(&self, team_id: &TeamId) -> Result<InventorySummary, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT COALESCE(SUM(quantity), 0)::BIGINT AS total_items,
                   COUNT(*) AS unique_components
            FROM team_components
            WHERE team_id = $1
            "#,
        )
        .bind(team_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to summarize inventory: {}", e)))?;

        Ok(InventorySummary {
            team_id: team_id.clone(),
            total_items: row.get("total_items"),
            unique_components: row.get("unique_components"),
        })
    }
}

fn row_to_team_component(row: &sqlx::postgres::PgRow) -> Result<TeamComponent, DomainError> {
    let id: i64 = row.get("id");
    let team_id: String = row.get("team_id");
    let public_component_id: Option<String> = row.get("public_component_id");
    let name: String = row.get("name");
    let vendor: String = row.get("vendor");
    let quantity: i32 = row.get("quantity");
    let location: Option<String> = row.get("location");
    let notes: Option<String> = row.get("notes");
    let added_by: Option<String> = row.get("added_by");
    let image_url: Option<String> = row.get("image_url");
    let cad_file_url: Option<String> = row.get("cad_file_url");
    let last_updated: chrono::DateTime<chrono::Utc> = row.get("last_updated");

    let team_id = TeamId::new(&team_id)
        .map_err(|e| DomainError::storage(format!("Invalid team ID in database: {}", e)))?;

    let public_component_id = public_component_id
        .map(|id| {
            ComponentId::new(&id).map_err(|e| {
                DomainError::storage(format!("Invalid component ID in database: {}", e))
            })
        })
        .transpose()?;

    Ok(TeamComponent::from_parts(
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
    ))
}
