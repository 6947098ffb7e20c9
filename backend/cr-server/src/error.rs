use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cr_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] cr_db::DbError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server stopped with an I/O error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
