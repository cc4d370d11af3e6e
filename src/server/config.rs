use chrono::TimeDelta;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 60;
const MAX_JWT_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const MIN_JWT_SECRET_LEN: usize = 32;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,

    pub server_addr: String,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} characters long", MIN_JWT_SECRET_LEN),
            }
            .into());
        }

        let jwt_expiration_minutes = match std::env::var("JWT_EXPIRATION_MINUTES") {
            Ok(value) => parse_expiration_minutes(&value)?,
            Err(_) => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret,
            jwt_expiration_minutes,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Token lifetime in minutes, between one minute and one year.
fn parse_expiration_minutes(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|minutes| (1..=MAX_JWT_EXPIRATION_MINUTES).contains(minutes))
        .filter(|minutes| TimeDelta::try_minutes(*minutes).is_some())
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRATION_MINUTES".to_string(),
            reason: format!(
                "'{}' is not a number of minutes between 1 and {}",
                value, MAX_JWT_EXPIRATION_MINUTES
            ),
        })
}
