//! HS256 access-token generation and validation.
//!
//! Tokens carry a [`Claims`] payload and live for [`TOKEN_TTL_HOURS`]. There
//! is no refresh flow and no revocation list.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use bookshelf_core::types::DbId;

use crate::config::{ConfigError, Environment};

/// Token lifetime in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Secret used outside production when `JWT_SECRET` is unset.
const DEVELOPMENT_SECRET: &str = "bookshelf-development-secret-change-me";

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub user_id: DbId,
    pub username: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Why a presented token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Malformed,
        }
    }
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration through `lookup`.
    ///
    /// | Env Var      | Required            | Default                      |
    /// |--------------|---------------------|------------------------------|
    /// | `JWT_SECRET` | **yes** (production) | development-only fallback   |
    pub fn from_lookup<F>(lookup: &F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => Ok(Self { secret }),
            None if environment.is_production() => Err(ConfigError::Missing("JWT_SECRET")),
            None => {
                tracing::warn!("JWT_SECRET is not set, using the development fallback secret");
                Ok(Self {
                    secret: DEVELOPMENT_SECRET.to_string(),
                })
            }
        }
    }
}

/// Generate an HS256 token for the given user, valid for [`TOKEN_TTL_HOURS`].
pub fn generate_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        user_id,
        username: username.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_HOURS * 3600,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Expiry is checked with zero leeway.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
