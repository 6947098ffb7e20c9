//! User entity - a registered account and its stored credential.

use crate::{PublicUser, Role};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account as persisted by the credential store.
///
/// `password_hash` only ever holds the salted one-way hash; the type is
/// deliberately not `Serialize` so it cannot leak into a response body.
/// Convert to [`PublicUser`] before handing it to anything outward facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique, case-sensitive as stored, immutable after registration
    pub email: String,
    /// Unique when present
    pub username: Option<String>,
    pub password_hash: String,
    pub role: Role,
    /// Opaque media URL
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub job_role: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with the default role and an empty profile.
    ///
    /// When `username` is `None` (or blank) the local part of `email` is used.
    pub fn new(
        name: String,
        email: String,
        username: Option<String>,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        let username = username
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| default_username(&email));

        Self {
            id: Uuid::new_v4(),
            name,
            email,
            username: Some(username),
            password_hash,
            role: Role::default(),
            avatar: None,
            bio: None,
            job_role: None,
            linkedin: None,
            github: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public projection (everything except the password hash)
    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self.clone())
    }
}

/// Substring of `email` before its first `@` (the whole string if there is none)
pub fn default_username(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}
