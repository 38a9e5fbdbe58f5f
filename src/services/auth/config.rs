//! Configuration for the authentication service

use crate::config::JwtConfig;
use crate::domain::entities::token::DEFAULT_TOKEN_VALIDITY_MINUTES;
use crate::errors::ConfigError;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Signing key material and issuer/audience claims
    pub jwt: JwtConfig,
    /// Access-token validity window in minutes
    pub token_validity_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            token_validity_minutes: DEFAULT_TOKEN_VALIDITY_MINUTES,
        }
    }
}

impl AuthServiceConfig {
    /// Create a configuration around the given signing material
    pub fn new(jwt: JwtConfig) -> Self {
        Self {
            jwt,
            token_validity_minutes: DEFAULT_TOKEN_VALIDITY_MINUTES,
        }
    }

    /// Set the access-token validity window in minutes
    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.token_validity_minutes = minutes;
        self
    }

    /// Validate signing material before the service is constructed
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        if self.token_validity_minutes <= 0 {
            return Err(ConfigError::InvalidValidityWindow {
                minutes: self.token_validity_minutes,
            });
        }
        Ok(())
    }
}
