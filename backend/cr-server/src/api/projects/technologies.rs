use serde::Deserialize;

/// `technologies` as sent by clients: a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Technologies {
    One(String),
    Many(Vec<String>),
}

impl Technologies {
    /// Flatten to a list. A blank single string counts as nothing sent.
    pub fn into_vec(self) -> Option<Vec<String>> {
        match self {
            Technologies::One(s) if s.trim().is_empty() => None,
            Technologies::One(s) => Some(vec![s]),
            Technologies::Many(list) => Some(list),
        }
    }
}
