pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::owner_summary::OwnerSummary;
pub use models::project::Project;
pub use models::project_type::ProjectType;
pub use models::public_user::PublicUser;
pub use models::role::Role;
pub use models::user::{User, default_username};

#[cfg(test)]
mod tests;
