//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token validity window (1 hour)
pub const DEFAULT_TOKEN_VALIDITY_MINUTES: i64 = 60;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Role carried from the user record
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// Expiry is issuance time plus the configured validity window; issuer
    /// and audience come from signing configuration.
    pub fn new_access_token(
        username: &str,
        role: &str,
        issuer: &str,
        audience: &str,
        validity_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(validity_minutes);

        Self {
            sub: username.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are valid (not expired and after nbf)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let claims = Claims::new_access_token(
            "admin",
            "Administrador",
            "exam-api",
            "exam-clients",
            DEFAULT_TOKEN_VALIDITY_MINUTES,
        );

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "Administrador");
        assert_eq!(claims.iss, "exam-api");
        assert_eq!(claims.aud, "exam-clients");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims =
            Claims::new_access_token("admin", "Administrador", "exam-api", "exam-clients", 60);

        // Set expiration to past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_not_before() {
        let mut claims =
            Claims::new_access_token("admin", "Administrador", "exam-api", "exam-clients", 60);

        // Set nbf to future
        claims.nbf = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_serialization() {
        let claims =
            Claims::new_access_token("empleado1", "Empleado", "exam-api", "exam-clients", 60);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let a = Claims::new_access_token("admin", "Administrador", "exam-api", "exam-clients", 60);
        let b = Claims::new_access_token("admin", "Administrador", "exam-api", "exam-clients", 60);

        assert_ne!(a.jti, b.jti);
    }
}
