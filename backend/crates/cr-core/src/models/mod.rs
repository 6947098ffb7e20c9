pub mod owner_summary;
pub mod project;
pub mod project_type;
pub mod public_user;
pub mod role;
pub mod user;
