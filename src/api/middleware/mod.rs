//! API middleware

pub mod user_auth;

pub use user_auth::{check_team_access, extract_bearer_token, RequireUser};
