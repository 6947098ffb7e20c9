use cr_core::PublicUser;

use serde::Serialize;

/// Public projection of the account plus a fresh bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: PublicUser,
    pub token: String,
}
