//! User domain module
//!
//! Every user belongs to a team; team membership drives inventory access.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserStatus};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_password, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
