use std::env;

use thiserror::Error;

/// Longest accepted token lifetime: one year.
const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(#[from] env::VarError),

    #[error("JWT_TTL_MINUTES must be between 1 and {max}, got {0:?}", max = MAX_TTL_MINUTES)]
    InvalidTtl(String),
}

/// Token signing settings. Built once at startup and handed to
/// [`crate::token::JwtKeys`].
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:fittrack.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            jwt: JwtConfig::from_env()?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")?,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "fittrack".to_string()),
            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "fittrack-users".to_string()),
            ttl_minutes: parse_ttl_minutes(env::var("JWT_TTL_MINUTES").ok().as_deref())?,
        })
    }
}

/// Unset means 60 minutes. Anything else must be a whole number of minutes
/// in `1..=MAX_TTL_MINUTES`.
fn parse_ttl_minutes(raw: Option<&str>) -> Result<i64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(60);
    };
    match raw.trim().parse::<i64>() {
        Ok(minutes) if (1..=MAX_TTL_MINUTES).contains(&minutes) => Ok(minutes),
        _ => Err(ConfigError::InvalidTtl(raw.to_string())),
    }
}
