use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    /// Defaults to the part of `email` before the '@'
    #[serde(default)]
    pub username: Option<String>,
}
