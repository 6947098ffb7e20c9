use cr_auth::{PasswordHasher, TokenService};
use cr_db::{ProjectRepository, UserRepository};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// Built once at startup from validated configuration; nothing in here is
/// mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub hasher: PasswordHasher,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        tokens: TokenService,
        hasher: PasswordHasher,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
            hasher,
            max_body_bytes,
        }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn projects(&self) -> ProjectRepository {
        ProjectRepository::new(self.pool.clone())
    }
}
