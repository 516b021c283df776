//! Access-token issuance and validation.
//!
//! Tokens are HMAC-signed JWTs carrying a [`Claims`] payload. There is no
//! refresh flow and no revocation list: a token stays valid until `exp`.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sentiment_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{parse_or, required, ConfigError, Lookup};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the account's database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens.
    pub secret: String,
    /// One of HS256 / HS384 / HS512.
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes.
    pub access_token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
pub const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;

impl JwtConfig {
    /// Load token configuration.
    ///
    /// | Env Var                       | Required | Default |
    /// |-------------------------------|----------|---------|
    /// | `JWT_SECRET_KEY`              | **yes**  | --      |
    /// | `JWT_ALGORITHM`               | no       | `HS256` |
    /// | `ACCESS_TOKEN_EXPIRE_MINUTES` | no       | `30`    |
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let secret = required(lookup, "JWT_SECRET_KEY")?;

        let algorithm = match lookup("JWT_ALGORITHM").as_deref() {
            None | Some("HS256") => Algorithm::HS256,
            Some("HS384") => Algorithm::HS384,
            Some("HS512") => Algorithm::HS512,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "JWT_ALGORITHM",
                    value: other.to_string(),
                    reason: "expected HS256, HS384 or HS512".to_string(),
                })
            }
        };

        let access_token_expiry_mins: i64 = parse_or(
            lookup,
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            DEFAULT_ACCESS_EXPIRY_MINS,
        )?;
        if access_token_expiry_mins <= 0 {
            return Err(ConfigError::Invalid {
                key: "ACCESS_TOKEN_EXPIRE_MINUTES",
                value: access_token_expiry_mins.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            secret,
            algorithm,
            access_token_expiry_mins,
        })
    }

    /// Access token lifetime in seconds.
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

/// Issue an access token for the given account.
pub fn generate_access_token(
    account_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: account_id,
        exp: now + config.expires_in_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Expiry is checked with zero leeway: a token one second past `exp` fails.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(config.algorithm);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
