//! Login request value object.

use serde::{Deserialize, Serialize};

/// Credential pair submitted to the login operation
///
/// Both fields are optional at the boundary. A missing field is normalized
/// to an empty string before the credential lookup runs, never rejected
/// early; the store decides whether anything matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Create a request with both fields present
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Username with the missing-field substitution applied
    pub fn username_or_empty(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// Password with the missing-field substitution applied
    pub fn password_or_empty(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_fields() {
        let request = LoginRequest::new("testuser", "testpass");
        assert_eq!(request.username.as_deref(), Some("testuser"));
        assert_eq!(request.password.as_deref(), Some("testpass"));
    }

    #[test]
    fn test_missing_fields_substitute_empty_strings() {
        let request = LoginRequest::default();
        assert!(request.username.is_none());
        assert!(request.password.is_none());
        assert_eq!(request.username_or_empty(), "");
        assert_eq!(request.password_or_empty(), "");
    }

    #[test]
    fn test_deserializes_with_absent_fields() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, LoginRequest::default());

        let request: LoginRequest =
            serde_json::from_str(r#"{"username":null,"password":"algo"}"#).unwrap();
        assert_eq!(request.username_or_empty(), "");
        assert_eq!(request.password_or_empty(), "algo");
    }
}
