use axum::{
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::catalog;
use super::health;
use super::inventory;
use super::state::AppState;
use super::types::Json;

/// GET / - Service banner
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Inventory tracking API for FRC robotics teams",
    }))
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Authentication
        .route("/register", post(auth::register))
        .route("/token", post(auth::token))
        .route("/me", get(auth::me))
        // Public catalog
        .route(
            "/public-components",
            get(catalog::list_components).post(catalog::create_component),
        )
        .route("/public-components/search", get(catalog::search_components))
        .route(
            "/public-components/{id}",
            get(catalog::get_component)
                .put(catalog::update_component)
                .delete(catalog::delete_component),
        )
        .route("/categories", get(catalog::list_categories))
        .route("/vendors", get(catalog::list_vendors))
        .route("/availability", get(catalog::list_availability))
        // Team inventory
        .route("/team-components", post(inventory::create_team_component))
        .route(
            "/team-components/{id}",
            get(inventory::get_team_component)
                .put(inventory::update_team_component)
                .delete(inventory::delete_team_component),
        )
        .route(
            "/teams/{team_id}/components",
            get(inventory::list_team_components),
        )
        .route(
            "/teams/{team_id}/inventory/summary",
            get(inventory::team_inventory_summary),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
