//! API layer - Route handlers, middleware, and shared types

pub mod auth;
pub mod catalog;
pub mod health;
pub mod inventory;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router_with_state;
pub use state::AppState;
