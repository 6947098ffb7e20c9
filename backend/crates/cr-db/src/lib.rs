pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{connect, connect_in_memory, ping, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::user_repository::UserRepository;
