use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::Result;
use crate::models::User;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric user id, rendered as a string.
    pub sub: String,
    /// Username at the time the token was issued.
    pub name: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// HMAC signing and verification keys. Built once from [`JwtConfig`] and
/// shared by the login handler and the bearer middleware.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: Duration::minutes(config.ttl_minutes),
        }
    }

    pub fn sign(&self, user: &User) -> Result<String> {
        self.sign_at(user, Utc::now().timestamp())
    }

    /// Signs a token as if issued at `issued_at` (unix seconds).
    pub fn sign_at(&self, user: &User, issued_at: i64) -> Result<String> {
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.username.clone(),
            iat: issued_at,
            exp: issued_at + self.ttl.num_seconds(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        tracing::debug!(user_id = user.id, "access token signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        // Expired means expired: no grace period past `exp`.
        validation.leeway = 0;
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}
