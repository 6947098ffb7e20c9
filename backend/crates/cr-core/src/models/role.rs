use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account role shown on a user's profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Alumni,
    Mentor,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Alumni => "alumni",
            Self::Mentor => "mentor",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "alumni" => Ok(Self::Alumni),
            "mentor" => Ok(Self::Mentor),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
