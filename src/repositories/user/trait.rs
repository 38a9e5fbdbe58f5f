//! User repository trait defining the credential-store interface.
//!
//! This module defines the repository pattern interface for user accounts.
//! The trait is async-first and uses Result types for proper error handling;
//! the authentication service consumes it without knowing how accounts are
//! stored.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for user-account persistence operations
///
/// Implementations handle the actual store access while maintaining the
/// abstraction boundary between domain and infrastructure layers. The
/// credential lookup compares the submitted pair against the stored record
/// directly; an implementation backed by a real database should substitute
/// salted-hash verification behind this same contract.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use exam_core::domain::entities::user::User;
/// use exam_core::errors::DomainError;
/// use exam_core::repositories::UserRepository;
///
/// struct SqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for SqlUserRepository {
///     async fn find_by_credentials(
///         &self,
///         username: &str,
///         password: &str,
///     ) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, user: User) -> Result<User, DomainError> {
///         Ok(user)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up an account by exact username/password pair
    ///
    /// # Returns
    /// * `Ok(Some(User))` - the pair matches a stored account
    /// * `Ok(None)` - no account matches; an unknown username and a wrong
    ///   password are indistinguishable to the caller
    /// * `Err(DomainError)` - the store itself failed
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Find an account by username alone
    ///
    /// # Returns
    /// * `Ok(Some(User))` - account found
    /// * `Ok(None)` - no account with the given username
    /// * `Err(DomainError)` - the store itself failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(User)` - the created account
    /// * `Err(DomainError)` - creation failed (e.g. duplicate username)
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
