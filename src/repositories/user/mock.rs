//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
///
/// Holds accounts in memory. A repository built with [`failing`] returns a
/// store fault from every call, which lets callers exercise the
/// fault-propagation contract of the authentication service.
///
/// [`failing`]: MockUserRepository::failing
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    failure: Option<String>,
}

impl MockUserRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            failure: None,
        }
    }

    /// Create a repository pre-seeded with accounts
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            failure: None,
        }
    }

    /// Create a repository whose every call fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            failure: Some(message.into()),
        }
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::Internal {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check_failure()?;
        let mut users = self.users.write().await;

        // Check for duplicate username
        if users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::Validation {
                message: "Username already registered".to_string(),
            });
        }

        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_credentials_requires_exact_pair() {
        let repo = MockUserRepository::with_users(vec![User::new(
            "admin",
            "admin123",
            "Administrador",
        )]);

        let found = repo.find_by_credentials("admin", "admin123").await.unwrap();
        assert!(found.is_some());

        let wrong_password = repo.find_by_credentials("admin", "otra").await.unwrap();
        assert!(wrong_password.is_none());

        let unknown_user = repo
            .find_by_credentials("noexiste", "admin123")
            .await
            .unwrap();
        assert!(unknown_user.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let repo = MockUserRepository::new();
        repo.create(User::new("admin", "admin123", "Administrador"))
            .await
            .unwrap();

        let err = repo
            .create(User::new("admin", "otra", "Empleado"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let found = repo.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(found.role, "Administrador");
    }

    #[tokio::test]
    async fn test_failing_repository_faults_every_call() {
        let repo = MockUserRepository::failing("connection refused");

        let err = repo
            .find_by_credentials("admin", "admin123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));

        let err = repo.find_by_username("admin").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
