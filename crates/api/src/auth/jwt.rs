//! Admin session tokens.
//!
//! A successful login yields one HS256 JWT carrying [`Claims`]. Tokens are
//! stamped with the [`ISSUER`] and rejected if it differs. There is no
//! refresh flow: the admin logs in again once a token expires.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `iss` claim written into and required from every token.
pub const ISSUER: &str = "folio";

/// Default access token lifetime in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin username.
    pub sub: String,
    pub role: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    /// Token id (UUID v4), logged with every admin request.
    pub jti: String,
}

impl Claims {
    /// Claims for a token issued now and valid for `ttl_mins`.
    pub fn issue(subject: &str, role: &str, ttl_mins: i64) -> Self {
        let now = Utc::now().timestamp();
        Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            iss: ISSUER.to_string(),
            exp: now + ttl_mins * 60,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required) and `JWT_ACCESS_EXPIRY_MINS` (default 60).
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or the expiry is not an
    /// integer.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .ok()
            .map(|v| {
                v.parse::<i64>()
                    .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64")
            })
            .unwrap_or(DEFAULT_ACCESS_EXPIRY_MINS);

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Token lifetime in seconds, as reported to the client.
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

fn sign(claims: &Claims, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Sign a fresh access token for `subject` with the given role.
pub fn generate_access_token(
    subject: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    sign(
        &Claims::issue(subject, role, config.access_token_expiry_mins),
        config,
    )
}

/// Check signature, expiry and issuer, and return the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[ISSUER]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}
