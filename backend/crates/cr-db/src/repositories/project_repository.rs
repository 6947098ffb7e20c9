//! Project repository for CRUD operations on project postings.
//!
//! Listing queries join the owning user so callers get an [`OwnerSummary`]
//! alongside each project. Writes that follow an ownership check also filter
//! on `owner_id`, so a row whose owner differs is never touched.

use crate::repositories::user_repository::timestamp_from_millis;
use crate::{DbError, Result as DbErrorResult};

use cr_core::{OwnerSummary, Project, ProjectType};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const PROJECT_COLUMNS: &str = "p.id, p.owner_id, p.title, p.description, p.technologies, \
     p.project_type, p.github_link, p.live_link, p.thumbnail, p.demo_video, \
     p.created_at, p.updated_at";

const OWNER_COLUMNS: &str =
    "u.name AS owner_name, u.email AS owner_email, u.avatar AS owner_avatar";

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, owner_id, title, description, technologies, project_type,
                    github_link, live_link, thumbnail, demo_video,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(project.owner_id.to_string())
        .bind(&project.title)
        .bind(&project.description)
        .bind(technologies_to_json(&project.technologies)?)
        .bind(project.project_type.as_str())
        .bind(&project.github_link)
        .bind(&project.live_link)
        .bind(&project.thumbnail)
        .bind(&project.demo_video)
        .bind(project.created_at.timestamp_millis())
        .bind(project.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects p WHERE p.id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    /// Single project with its owner's name, email and avatar.
    pub async fn find_with_owner(
        &self,
        id: Uuid,
    ) -> DbErrorResult<Option<(Project, OwnerSummary)>> {
        let row = sqlx::query(&format!(
            r#"
                SELECT {PROJECT_COLUMNS}, {OWNER_COLUMNS}
                FROM projects p
                JOIN users u ON u.id = p.owner_id
                WHERE p.id = ?
            "#
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(|r| -> DbErrorResult<(Project, OwnerSummary)> {
                let project = project_from_row(r)?;
                let owner = owner_from_row(r, project.owner_id, true)?;
                Ok((project, owner))
            })
            .transpose()
    }

    /// All projects, newest first. `keyword` restricts to titles containing it
    /// (case-insensitive for ASCII).
    pub async fn search(
        &self,
        keyword: Option<&str>,
    ) -> DbErrorResult<Vec<(Project, OwnerSummary)>> {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());

        let rows = match keyword {
            Some(keyword) => {
                sqlx::query(&format!(
                    r#"
                        SELECT {PROJECT_COLUMNS}, {OWNER_COLUMNS}
                        FROM projects p
                        JOIN users u ON u.id = p.owner_id
                        WHERE p.title LIKE ? ESCAPE '\'
                        ORDER BY p.created_at DESC, p.rowid DESC
                    "#
                ))
                .bind(like_pattern(keyword))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    r#"
                        SELECT {PROJECT_COLUMNS}, {OWNER_COLUMNS}
                        FROM projects p
                        JOIN users u ON u.id = p.owner_id
                        ORDER BY p.created_at DESC, p.rowid DESC
                    "#
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(listing_from_row).collect()
    }

    /// Projects owned by `owner_id`, newest first.
    pub async fn find_by_owner(
        &self,
        owner_id: Uuid,
    ) -> DbErrorResult<Vec<(Project, OwnerSummary)>> {
        let rows = sqlx::query(&format!(
            r#"
                SELECT {PROJECT_COLUMNS}, {OWNER_COLUMNS}
                FROM projects p
                JOIN users u ON u.id = p.owner_id
                WHERE p.owner_id = ?
                ORDER BY p.created_at DESC, p.rowid DESC
            "#
        ))
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(listing_from_row).collect()
    }

    /// Persist mutable fields. Only matches when the stored owner is still
    /// `project.owner_id`; the owner column itself is never written.
    ///
    /// Returns `false` if nothing was updated.
    pub async fn update(&self, project: &Project) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE projects
                SET title = ?, description = ?, technologies = ?, project_type = ?,
                    github_link = ?, live_link = ?, thumbnail = ?, demo_video = ?,
                    updated_at = ?
                WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(technologies_to_json(&project.technologies)?)
        .bind(project.project_type.as_str())
        .bind(&project.github_link)
        .bind(&project.live_link)
        .bind(&project.thumbnail)
        .bind(&project.demo_video)
        .bind(project.updated_at.timestamp_millis())
        .bind(project.id.to_string())
        .bind(project.owner_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete, scoped to the owner. Returns `false` if nothing matched.
    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// `%keyword%` with LIKE wildcards in the keyword escaped.
pub(crate) fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[track_caller]
fn technologies_to_json(technologies: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(technologies).map_err(|e| DbError::Initialization {
        message: format!("Failed to encode projects.technologies: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn listing_from_row(row: &SqliteRow) -> DbErrorResult<(Project, OwnerSummary)> {
    let project = project_from_row(row)?;
    let owner = owner_from_row(row, project.owner_id, false)?;
    Ok((project, owner))
}

fn owner_from_row(
    row: &SqliteRow,
    owner_id: Uuid,
    include_email: bool,
) -> DbErrorResult<OwnerSummary> {
    let email: String = row.try_get("owner_email")?;

    Ok(OwnerSummary {
        id: owner_id,
        name: row.try_get("owner_name")?,
        email: include_email.then_some(email),
        avatar: row.try_get("owner_avatar")?,
    })
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let owner_id: String = row.try_get("owner_id")?;
    let technologies: String = row.try_get("technologies")?;
    let project_type: String = row.try_get("project_type")?;

    Ok(Project {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in projects.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        owner_id: Uuid::parse_str(&owner_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in projects.owner_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        technologies: serde_json::from_str(&technologies).map_err(|e| {
            DbError::Initialization {
                message: format!("Invalid JSON in projects.technologies: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        project_type: ProjectType::from_str(&project_type).map_err(|e| {
            DbError::Initialization {
                message: format!("Invalid ProjectType in projects.project_type: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        github_link: row.try_get("github_link")?,
        live_link: row.try_get("live_link")?,
        thumbnail: row.try_get("thumbnail")?,
        demo_video: row.try_get("demo_video")?,
        created_at: timestamp_from_millis(row.try_get("created_at")?, "projects.created_at")?,
        updated_at: timestamp_from_millis(row.try_get("updated_at")?, "projects.updated_at")?,
    })
}
