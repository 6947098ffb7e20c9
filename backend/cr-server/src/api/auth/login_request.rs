use serde::Deserialize;

/// Missing fields deserialize as empty and simply fail to match.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
