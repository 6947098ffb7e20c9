use cr_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A unique index rejected the write. `field` is the offending column
    /// (`email`, `username`, ...).
    #[error("Unique constraint violated on '{field}' {location}")]
    UniqueViolation {
        field: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(db_err) = &source
            && db_err.is_unique_violation()
        {
            let field = unique_violation_field(db_err.message());
            log::debug!("Unique constraint violated on '{}': {}", field, db_err.message());

            return Self::UniqueViolation { field, location };
        }

        Self::Sqlx { source, location }
    }
}

/// Pull the column name out of SQLite's `UNIQUE constraint failed: users.email`.
///
/// Falls back to the raw message when the shape is unexpected.
pub(crate) fn unique_violation_field(message: &str) -> String {
    message
        .rsplit(':')
        .next()
        .and_then(|cols| cols.split(',').next())
        .map(str::trim)
        .and_then(|col| col.rsplit('.').next())
        .filter(|col| !col.is_empty())
        .unwrap_or(message)
        .to_string()
}

pub type Result<T> = std::result::Result<T, DbError>;
