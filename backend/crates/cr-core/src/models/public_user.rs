use crate::{Role, User};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user without credential material; the only user shape that leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub role: Role,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub job_role: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            username: u.username,
            role: u.role,
            avatar: u.avatar,
            bio: u.bio,
            job_role: u.job_role,
            linkedin: u.linkedin,
            github: u.github,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
