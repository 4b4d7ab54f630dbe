//! JWT token generation and validation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::user::User;
use crate::domain::DomainError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Team the user belongs to
    pub team_id: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Create new claims for a user
    pub fn new(user: &User, expiration_minutes: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(expiration_minutes as i64);

        Self {
            sub: user.id().as_str().to_string(),
            username: user.username().to_string(),
            team_id: user.team_id().as_str().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Get user ID from claims
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in minutes
    pub expiration_minutes: u64,
}

impl JwtConfig {
    /// Create new JWT configuration
    pub fn new(secret: impl Into<String>, expiration_minutes: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_minutes,
        }
    }
}

/// A signed bearer token together with its expiry
///
/// The expiry is the token's own `exp` claim, so what clients are told
/// matches what validation will enforce.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Trait for token operations
pub trait TokenService: Send + Sync + Debug {
    /// Generate a bearer token for a user
    fn generate(&self, user: &User) -> Result<IssuedToken, DomainError>;

    /// Validate a token and return its claims
    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError>;
}

/// HS256 token service signed with a shared secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_minutes", &self.config.expiration_minutes)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenService for JwtService {
    fn generate(&self, user: &User) -> Result<IssuedToken, DomainError> {
        let claims = JwtClaims::new(user, self.config.expiration_minutes);

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))?;

        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| DomainError::internal("Token expiry timestamp out of range"))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let validation = Validation::default();

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::unauthorized(format!("Invalid JWT: {}", e)))?;

        Ok(token_data.claims)
    }
}
