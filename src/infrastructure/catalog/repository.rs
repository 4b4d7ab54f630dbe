//! PostgreSQL catalog repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder, Row};

use crate::domain::catalog::{
    Availability, CatalogQuery, CatalogRepository, ComponentId, PublicComponent,
};
use crate::domain::DomainError;

/// PostgreSQL implementation of CatalogRepository
#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COMPONENT_COLUMNS: &str = "id, name, vendor, category, cost, availability, \
     source, description, image_url, cad_file_url, created_at, updated_at";

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn get(&self, id: &ComponentId) -> Result<Option<PublicComponent>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM public_components WHERE id = $1",
            COMPONENT_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get component: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_component(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, component: PublicComponent) -> Result<PublicComponent, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO public_components
                (id, name, vendor, category, cost, availability,
                 source, description, image_url, cad_file_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(component.id().as_str())
        .bind(component.name())
        .bind(component.vendor())
        .bind(component.category())
        .bind(component.cost())
        .bind(component.availability().as_str())
        .bind(component.source())
        .bind(component.description())
        .bind(component.image_url())
        .bind(component.cad_file_url())
        .bind(component.created_at())
        .bind(component.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Component '{}' already exists",
                    component.id().as_str()
                ))
            } else {
                DomainError::storage(format!("Failed to create component: {}", e))
            }
        })?;

        Ok(component)
    }

    async fn update(&self, component: PublicComponent) -> Result<PublicComponent, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE public_components
            SET name = $2, vendor = $3, category = $4, cost = $5, availability = $6,
                source = $7, description = $8, image_url = $9, cad_file_url = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(component.id().as_str())
        .bind(component.name())
        .bind(component.vendor())
        .bind(component.category())
        .bind(component.cost())
        .bind(component.availability().as_str())
        .bind(component.source())
        .bind(component.description())
        .bind(component.image_url())
        .bind(component.cad_file_url())
        .bind(component.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update component: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Component '{}' not found",
                component.id().as_str()
            )));
        }

        Ok(component)
    }

    async fn delete(&self, id: &ComponentId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM public_components WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete component: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<PublicComponent>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM public_components ORDER BY id",
            COMPONENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list components: {}", e)))?;

        let mut components = Vec::with_capacity(rows.len());

        for row in rows {
            components.push(row_to_component(&row)?);
        }

        Ok(components)
    }

    async fn search(&self, query: &CatalogQuery) -> Result<Vec<PublicComponent>, DomainError> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM public_components WHERE 1=1",
            COMPONENT_COLUMNS
        ));

        if let Some(text) = &query.text {
            let pattern = format!("%{}%", text);
            builder.push(" AND (name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR description ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
        if let Some(category) = &query.category {
            builder.push(" AND category ILIKE ");
            builder.push_bind(format!("%{}%", category));
        }
        if let Some(vendor) = &query.vendor {
            builder.push(" AND vendor ILIKE ");
            builder.push_bind(format!("%{}%", vendor));
        }
        if let Some(min_cost) = query.min_cost {
            builder.push(" AND cost >= ");
            builder.push_bind(min_cost);
        }
        if let Some(max_cost) = query.max_cost {
            builder.push(" AND cost <= ");
            builder.push_bind(max_cost);
        }

        builder.push(" ORDER BY id");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search components: {}", e)))?;

        let mut components = Vec::with_capacity(rows.len());

        for row in rows {
            components.push(row_to_component(&row)?);
        }

        Ok(components)
    }

    async fn exists(&self, id: &ComponentId) -> Result<bool, DomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM public_components WHERE id = $1)")
                .bind(id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to check component existence: {}", e))
                })?;

        Ok(exists)
    }

    async fn categories(&self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar("SELECT DISTINCT category FROM public_components ORDER BY category")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list categories: {}", e)))
    }

    async fn vendors(&self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar("SELECT DISTINCT vendor FROM public_components ORDER BY vendor")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list vendors: {}", e)))
    }
}

fn row_to_component(row: &sqlx::postgres::PgRow) -> Result<PublicComponent, DomainError> {
    let id: String = row.get("id");
    let name: String = row.get("name");
    let vendor: String = row.get("vendor");
    let category: String = row.get("category");
    let cost: f64 = row.get("cost");
    let availability: String = row.get("availability");
    let source: Option<String> = row.get("source");
    let description: Option<String> = row.get("description");
    let image_url: Option<String> = row.get("image_url");
    let cad_file_url: Option<String> = row.get("cad_file_url");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let component_id = ComponentId::new(&id)
        .map_err(|e| DomainError::storage(format!("Invalid component ID in database: {}", e)))?;

    Ok(PublicComponent::from_parts(
        component_id,
        name,
        vendor,
        category,
        cost,
        Availability::parse(&availability),
        source,
        description,
        image_url,
        cad_file_url,
        created_at,
        updated_at,
    ))
}
