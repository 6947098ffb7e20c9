//! Credential store: persistence for registered accounts.
//!
//! Email and username uniqueness is enforced by unique indexes. A racing
//! insert or update that collides surfaces as [`DbError::UniqueViolation`]
//! naming the column, never as a raw driver error.

use crate::{DbError, Result as DbErrorResult};

use cr_core::{PublicUser, Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const PUBLIC_COLUMNS: &str = "id, name, email, username, role, avatar, bio, job_role, \
     linkedin, github, created_at, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, email, username, password_hash, role,
                    avatar, bio, job_role, linkedin, github,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.avatar)
        .bind(&user.bio)
        .bind(&user.job_role)
        .bind(&user.linkedin)
        .bind(&user.github)
        .bind(user.created_at.timestamp_millis())
        .bind(user.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {PUBLIC_COLUMNS}, password_hash FROM users WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Load an account without ever selecting its password hash.
    pub async fn find_public_by_id(&self, id: Uuid) -> DbErrorResult<Option<PublicUser>> {
        let row = sqlx::query(&format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(public_user_from_row).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {PUBLIC_COLUMNS}, password_hash FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {PUBLIC_COLUMNS}, password_hash FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Persist every mutable field. `email` and `created_at` are never written.
    ///
    /// Returns `false` when no account with `user.id` exists.
    pub async fn update(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, username = ?, password_hash = ?, role = ?,
                    avatar = ?, bio = ?, job_role = ?, linkedin = ?, github = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.avatar)
        .bind(&user.bio)
        .bind(&user.job_role)
        .bind(&user.linkedin)
        .bind(&user.github)
        .bind(user.updated_at.timestamp_millis())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn public_user_from_row(row: &SqliteRow) -> DbErrorResult<PublicUser> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;

    Ok(PublicUser {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        username: row.try_get("username")?,
        role: Role::from_str(&role).map_err(|e| DbError::Initialization {
            message: format!("Invalid Role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        avatar: row.try_get("avatar")?,
        bio: row.try_get("bio")?,
        job_role: row.try_get("job_role")?,
        linkedin: row.try_get("linkedin")?,
        github: row.try_get("github")?,
        created_at: timestamp_from_millis(row.try_get("created_at")?, "users.created_at")?,
        updated_at: timestamp_from_millis(row.try_get("updated_at")?, "users.updated_at")?,
    })
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let public = public_user_from_row(row)?;

    Ok(User {
        id: public.id,
        name: public.name,
        email: public.email,
        username: public.username,
        password_hash: row.try_get("password_hash")?,
        role: public.role,
        avatar: public.avatar,
        bio: public.bio,
        job_role: public.job_role,
        linkedin: public.linkedin,
        github: public.github,
        created_at: public.created_at,
        updated_at: public.updated_at,
    })
}

#[track_caller]
pub(crate) fn timestamp_from_millis(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
