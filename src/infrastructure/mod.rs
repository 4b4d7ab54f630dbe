//! Infrastructure layer - Repositories, services, and external concerns

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod logging;
pub mod seed;
pub mod storage;
pub mod user;
