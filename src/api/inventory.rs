//! Team inventory endpoints
//!
//! Every operation is scoped to the caller's team.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::middleware::{check_team_access, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::inventory::{InventorySummary, TeamComponent, TeamId};
use crate::infrastructure::inventory::{AddComponentRequest, UpdateInventoryRequest};

/// Request body for POST /team-components
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamComponentBody {
    pub team_id: String,
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

/// Request body for PUT /team-components/{id}
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateTeamComponentBody {
    pub name: Option<String>,
    pub vendor: Option<String>,
    pub quantity: Option<i32>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub cad_file_url: Option<String>,
}

/// POST /team-components - Add a record to the caller's team inventory
pub async fn create_team_component(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<CreateTeamComponentBody>,
) -> Result<(StatusCode, Json<TeamComponent>), ApiError> {
    let team_id = parse_team_id(&body.team_id)?;
    check_team_access(&user, &team_id)?;

    let component = state
        .inventory_service
        .add(
            &team_id,
            AddComponentRequest {
                public_component_id: body.public_component_id,
                name: body.name,
                vendor: body.vendor,
                quantity: body.quantity,
                location: body.location,
                notes: body.notes,
                added_by: body.added_by,
                image_url: body.image_url,
                cad_file_url: body.cad_file_url,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(component)))
}

/// GET /team-components/{id} - Single inventory record
pub async fn get_team_component(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamComponent>, ApiError> {
    let component = state.inventory_service.get(user.team_id(), id).await?;
    Ok(Json(component))
}

/// PUT /team-components/{id} - Partial update of an inventory record
pub async fn update_team_component(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTeamComponentBody>,
) -> Result<Json<TeamComponent>, ApiError> {
    let component = state
        .inventory_service
        .update(
            user.team_id(),
            id,
            UpdateInventoryRequest {
                name: body.name,
                vendor: body.vendor,
                quantity: body.quantity,
                location: body.location,
                notes: body.notes,
                image_url: body.image_url,
                cad_file_url: body.cad_file_url,
            },
        )
        .await?;

    Ok(Json(component))
}

/// DELETE /team-components/{id} - Remove an inventory record
pub async fn delete_team_component(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.inventory_service.remove(user.team_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /teams/{team_id}/components - All records owned by a team
pub async fn list_team_components(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<TeamComponent>>, ApiError> {
    let team_id = parse_team_id(&team_id)?;
    check_team_access(&user, &team_id)?;

    Ok(Json(state.inventory_service.list(&team_id).await?))
}

/// GET /teams/{team_id}/inventory/summary - Aggregate counts for a team
pub async fn team_inventory_summary(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<InventorySummary>, ApiError> {
    let team_id = parse_team_id(&team_id)?;
    check_team_access(&user, &team_id)?;

    Ok(Json(state.inventory_service.summary(&team_id).await?))
}

fn parse_team_id(team_id: &str) -> Result<TeamId, ApiError> {
    TeamId::new(team_id).map_err(|e| ApiError::bad_request(e.to_string()).with_param("team_id"))
}
