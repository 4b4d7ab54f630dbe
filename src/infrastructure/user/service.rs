//! User service for registration and authentication

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::inventory::TeamId;
use crate::domain::user::{
    validate_email, validate_password, validate_username, User, UserId, UserRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::auth::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub team_id: String,
}

/// User service handling registration and login
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        info!(username = %request.username, team_id = %request.team_id, "Registering user");

        validate_username(&request.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let team_id =
            TeamId::new(&request.team_id).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.username_exists(&request.username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = User::new(
            UserId::generate(),
            request.username,
            request.email,
            password_hash,
            team_id,
        );

        self.repository.create(user).await
    }

    /// Authenticate a user by username and password
    ///
    /// Every failure path reports the same message so callers cannot
    /// distinguish a missing user from a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let user = match self.repository.get_by_username(username).await? {
            Some(user) => user,
            None => {
                warn!(username = %username, "Login attempt for unknown user");
                return Err(DomainError::unauthorized("Invalid username or password"));
            }
        };

        if !user.is_active() {
            warn!(username = %username, "Login attempt for suspended user");
            return Err(DomainError::unauthorized("Invalid username or password"));
        }

        if !self.hasher.verify(password, user.password_hash()) {
            warn!(username = %username, "Login attempt with wrong password");
            return Err(DomainError::unauthorized("Invalid username or password"));
        }

        self.repository.record_login(user.id()).await?;

        info!(username = %username, "User logged in");

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        self.repository
            .get(&UserId::from_string(id))
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserRepository, UserStatus};
    use crate::infrastructure::auth::Argon2Hasher;

    fn service() -> UserService<MockUserRepository, Argon2Hasher> {
        UserService::new(Arc::new(MockUserRepository::new()), Arc::new(Argon2Hasher::new()))
    }

    fn register_request() -> RegisterUserRequest {
        RegisterUserRequest {
            username: "alex".to_string(),
            email: "alex@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            team_id: "254".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let service = service();

        let user = service.register(register_request()).await.unwrap();
        assert_eq!(user.username(), "alex");
        assert_eq!(user.team_id().as_str(), "254");
        assert!(user.last_login_at().is_none());

        let authenticated = service.authenticate("alex", "hunter2hunter2").await.unwrap();
        assert_eq!(authenticated.id(), user.id());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let service = service();

        service.register(register_request()).await.unwrap();

        let mut request = register_request();
        request.email = "other@example.com".to_string();

        let result = service.register(request).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = service();

        service.register(register_request()).await.unwrap();

        let mut request = register_request();
        request.username = "jordan".to_string();

        let result = service.register(request).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_register_invalid_fields() {
        let service = service();

        let mut request = register_request();
        request.username = "ab".to_string();
        assert!(matches!(
            service.register(request).await,
            Err(DomainError::Validation { .. })
        ));

        let mut request = register_request();
        request.email = "not-an-email".to_string();
        assert!(matches!(
            service.register(request).await,
            Err(DomainError::Validation { .. })
        ));

        let mut request = register_request();
        request.password = "short".to_string();
        assert!(matches!(
            service.register(request).await,
            Err(DomainError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = service();
        service.register(register_request()).await.unwrap();

        let result = service.authenticate("alex", "wrong-password").await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let service = service();

        let result = service.authenticate("nobody", "password123").await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_suspended_user() {
        let repository = Arc::new(MockUserRepository::new());
        let service = UserService::new(repository.clone(), Arc::new(Argon2Hasher::new()));

        let mut user = service.register(register_request()).await.unwrap();
        user.set_status(UserStatus::Suspended);
        repository.update(&user).await.unwrap();

        let result = service.authenticate("alex", "hunter2hunter2").await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_records_login() {
        let service = service();
        service.register(register_request()).await.unwrap();

        service.authenticate("alex", "hunter2hunter2").await.unwrap();

        let user = service.authenticate("alex", "hunter2hunter2").await.unwrap();
        assert!(user.last_login_at().is_some());
    }
}
