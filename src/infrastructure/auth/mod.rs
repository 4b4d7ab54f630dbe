//! Authentication infrastructure - JWT tokens and password hashing

mod jwt;
mod password;

pub use jwt::{IssuedToken, JwtClaims, JwtConfig, JwtService, TokenService};
pub use password::{Argon2Hasher, PasswordHasher};
