//! User account entity for credential-based authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account as held by the credential store
///
/// The stored password is what the submitted credential pair is compared
/// against; it never leaves the store boundary and is never copied into
/// issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, unique within the store
    pub username: String,

    /// Stored password for the account
    pub password: String,

    /// Role carried into issued tokens (e.g. "Administrador", "Empleado")
    pub role: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
            created_at: Utc::now(),
        }
    }
}
