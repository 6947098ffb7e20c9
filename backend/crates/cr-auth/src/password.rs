use crate::{AuthError, Result as AuthErrorResult};

use cr_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Salted bcrypt hashing on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Errors carry the location of the caller, not of this module.
    #[track_caller]
    pub fn hash(
        &self,
        password: &str,
    ) -> impl Future<Output = AuthErrorResult<String>> + Send + use<> {
        let password = password.to_string();
        let cost = self.cost;
        let caller = Location::caller();

        async move {
            tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
                .await
                .map_err(|e| AuthError::Hashing {
                    message: format!("Task join error: {}", e),
                    location: ErrorLocation::from(caller),
                })?
                .map_err(|e| AuthError::Hashing {
                    message: e.to_string(),
                    location: ErrorLocation::from(caller),
                })
        }
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    #[track_caller]
    pub fn verify(
        &self,
        password: &str,
        hash: &str,
    ) -> impl Future<Output = AuthErrorResult<bool>> + Send + use<> {
        let password = password.to_string();
        let hash = hash.to_string();
        let caller = Location::caller();

        async move {
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
                .await
                .map_err(|e| AuthError::Hashing {
                    message: format!("Task join error: {}", e),
                    location: ErrorLocation::from(caller),
                })?
                .map_err(|e| AuthError::Hashing {
                    message: e.to_string(),
                    location: ErrorLocation::from(caller),
                })
        }
    }
}
