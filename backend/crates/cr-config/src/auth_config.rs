use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST,
    MIN_JWT_SECRET_LENGTH,
};

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required.
    pub jwt_secret: Option<String>,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

// Hand-written so the secret never reaches a log line
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set CR_AUTH_JWT_SECRET or JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }

    /// Secret bytes for the token service. Only meaningful after `validate`.
    pub fn secret_bytes(&self) -> ConfigErrorResult<&[u8]> {
        self.jwt_secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is not set"))
    }
}
