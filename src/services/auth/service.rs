//! Main authentication service implementation

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::LoginRequest;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;

use super::config::AuthServiceConfig;

/// Authentication service issuing signed access tokens for credential logins
///
/// The service is stateless across calls: it holds only the signing material
/// derived from its configuration and the credential-store handle. Concurrent
/// logins are independent and need no coordination.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    config: AuthServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: UserRepository> std::fmt::Debug for AuthService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("config", &self.config)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service
    ///
    /// # Arguments
    ///
    /// * `repository` - Credential store the login pair is looked up in
    /// * `config` - Service configuration
    ///
    /// # Returns
    ///
    /// A new `AuthService` instance, or a `ConfigError` when signing
    /// material is missing. A misconfigured service can never be
    /// constructed, so signing problems are startup faults rather than
    /// per-request ones.
    pub fn new(repository: Arc<R>, config: AuthServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.jwt.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt.issuer]);
        validation.set_audience(&[&config.jwt.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Authenticates a credential pair and issues an access token
    ///
    /// A missing username or password is normalized to an empty string
    /// before the lookup runs; the store decides whether anything matches.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(token))` - credentials matched; the token carries the
    ///   username as subject and the record's role
    /// * `Ok(None)` - no matching account. An unknown username and a wrong
    ///   password both land here
    /// * `Err(DomainError)` - the credential store failed; the error is
    ///   propagated unmodified for the boundary layer to map
    pub async fn login(&self, request: LoginRequest) -> DomainResult<Option<String>> {
        let username = request.username_or_empty();
        let password = request.password_or_empty();

        let user = match self
            .repository
            .find_by_credentials(username, password)
            .await?
        {
            Some(user) => user,
            None => {
                debug!(username, "login rejected: no matching account");
                return Ok(None);
            }
        };

        let claims = Claims::new_access_token(
            &user.username,
            &user.role,
            &self.config.jwt.issuer,
            &self.config.jwt.audience,
            self.config.token_validity_minutes,
        );
        let token = self.encode_jwt(&claims)?;

        debug!(username = %user.username, role = %user.role, "access token issued");
        Ok(Some(token))
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns the claims
    ///
    /// Validation covers signature, issuer, audience, expiry and not-before,
    /// using the same key material that issued the token.
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else if e.kind() == &jsonwebtoken::errors::ErrorKind::ImmatureSignature {
                    DomainError::Token(TokenError::TokenNotYetValid)
                } else if e.kind() == &jsonwebtoken::errors::ErrorKind::InvalidSignature {
                    DomainError::Token(TokenError::InvalidSignature)
                } else {
                    DomainError::Token(TokenError::InvalidTokenFormat)
                }
            })?;

        Ok(token_data.claims)
    }
}
