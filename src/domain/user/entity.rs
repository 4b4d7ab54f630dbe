//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::inventory::TeamId;

/// User identifier - a server-generated UUID string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh random user ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing ID value (as read from storage)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// User is active and can log in
    #[default]
    Active,
    /// User is temporarily suspended
    Suspended,
}

impl UserStatus {
    /// Check if the user can log in
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Suspended => write!(f, "suspended"),
        }
    }
}

/// User entity for authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    id: UserId,
    /// Username for login
    username: String,
    /// Contact email, unique across users
    email: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Current status of the account
    status: UserStatus,
    /// Team this user belongs to
    team_id: TeamId,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
    /// Last login timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        team_id: TeamId,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            status: UserStatus::Active,
            team_id,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Reconstruct a user from stored values
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: UserId,
        username: String,
        email: String,
        password_hash: String,
        status: UserStatus,
        team_id: TeamId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        last_login_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            status,
            team_id,
            created_at,
            updated_at,
            last_login_at,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    /// Check if the user is active and can log in
    pub fn is_active(&self) -> bool {
        self.status.can_login()
    }

    // Mutators

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.touch();
    }

    pub fn set_status(&mut self, status: UserStatus) {
        self.status = status;
        self.touch();
    }

    /// Record a login
    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            UserId::generate(),
            "alex",
            "alex@example.com",
            "argon2-hash",
            TeamId::new("254").unwrap(),
        )
    }

    #[test]
    fn test_user_id_generate_is_unique() {
        assert_ne!(UserId::generate().as_str(), UserId::generate().as_str());
    }

    #[test]
    fn test_user_creation() {
        let user = test_user();

        assert_eq!(user.username(), "alex");
        assert_eq!(user.email(), "alex@example.com");
        assert_eq!(user.team_id().as_str(), "254");
        assert!(user.is_active());
        assert!(user.last_login_at().is_none());
    }

    #[test]
    fn test_user_status() {
        let mut user = test_user();
        assert!(user.is_active());

        user.set_status(UserStatus::Suspended);
        assert!(!user.is_active());
        assert_eq!(user.status(), UserStatus::Suspended);
    }

    #[test]
    fn test_record_login() {
        let mut user = test_user();
        user.record_login();
        assert!(user.last_login_at().is_some());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = test_user();
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("argon2-hash"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("\"username\":\"alex\""));
    }
}
