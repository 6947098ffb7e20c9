use super::fixtures::create_test_user;
use cr_core::User;
use cr_db::UserRepository;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    cr_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user so projects have an owner to reference
pub async fn insert_test_user(pool: &SqlitePool, email: &str) -> User {
    let user = create_test_user(email);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}
