pub mod access_state;
pub mod claims;
pub mod error;
pub mod ownership;
pub mod password;
pub mod token_service;

pub use access_state::AccessState;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use ownership::ensure_owner;
pub use password::{MAX_PASSWORD_BYTES, PasswordHasher, validate_password};
pub use token_service::{TOKEN_TTL_DAYS, TokenService};

#[cfg(test)]
mod tests;
