use serde::Deserialize;

/// Partial profile update. `email` is not accepted; it never changes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    /// "student", "alumni" or "mentor"
    #[serde(default)]
    pub role: Option<String>,

    /// Media URL
    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub job_role: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    /// New plaintext password, re-hashed before storage
    #[serde(default)]
    pub password: Option<String>,
}
