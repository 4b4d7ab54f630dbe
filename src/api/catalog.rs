//! Public catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::catalog::{Availability, CatalogQuery, PublicComponent};
use crate::infrastructure::catalog::{CreateComponentRequest, UpdateComponentRequest};

/// Query parameters for GET /public-components/search
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub vendor: Option<String>,
    pub min_cost: Option<f64>,
    pub max_cost: Option<f64>,
}

impl From<SearchParams> for CatalogQuery {
    fn from(params: SearchParams) -> Self {
        CatalogQuery {
            text: params.q,
            category: params.category,
            vendor: params.vendor,
            min_cost: params.min_cost,
            max_cost: params.max_cost,
        }
    }
}

/// Request body for POST /public-components
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComponentBody {
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

/// Request body for PUT /public-components/{id}
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateComponentBody {
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

/// GET /public-components - Full catalog listing
pub async fn list_components(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicComponent>>, ApiError> {
    Ok(Json(state.catalog_service.list().await?))
}

/// GET /public-components/search - Filtered catalog search
pub async fn search_components(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PublicComponent>>, ApiError> {
    Ok(Json(state.catalog_service.search(params.into()).await?))
}

/// GET /public-components/{id} - Single catalog entry
pub async fn get_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicComponent>, ApiError> {
    Ok(Json(state.catalog_service.get(&id).await?))
}

/// POST /public-components - Create a catalog entry
pub async fn create_component(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<CreateComponentBody>,
) -> Result<(StatusCode, Json<PublicComponent>), ApiError> {
    let component = state
        .catalog_service
        .create(CreateComponentRequest {
            id: body.id,
            name: body.name,
            vendor: body.vendor,
            category: body.category,
            cost: body.cost,
            availability: body.availability,
            source: body.source,
            description: body.description,
            image_url: body.image_url,
            cad_file_url: body.cad_file_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(component)))
}

/// PUT /public-components/{id} - Partial update of a catalog entry
pub async fn update_component(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateComponentBody>,
) -> Result<Json<PublicComponent>, ApiError> {
    let component = state
        .catalog_service
        .update(
            &id,
            UpdateComponentRequest {
                name: body.name,
                vendor: body.vendor,
                category: body.category,
                cost: body.cost,
                availability: body.availability,
                source: body.source,
                description: body.description,
                image_url: body.image_url,
                cad_file_url: body.cad_file_url,
            },
        )
        .await?;

    Ok(Json(component))
}

/// DELETE /public-components/{id} - Remove a catalog entry
pub async fn delete_component(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /categories - Distinct catalog categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.catalog_service.categories().await?))
}

/// GET /vendors - Distinct catalog vendors
pub async fn list_vendors(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.catalog_service.vendors().await?))
}

/// GET /availability - The fixed list of availability states
pub async fn list_availability() -> Json<Vec<&'static str>> {
    Json(Availability::ALL.iter().map(|a| a.as_str()).collect())
}
