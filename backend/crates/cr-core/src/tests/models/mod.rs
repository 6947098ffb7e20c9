mod project;
mod project_type;
mod role;
mod user;
