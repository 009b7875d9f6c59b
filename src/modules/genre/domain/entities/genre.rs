use serde::{Deserialize, Serialize};

pub type GenreId = i32;

/// Genre id used by list filters to mean "no genre filter applied".
pub const ALL_GENRES_ID: GenreId = 0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub description: Option<String>,
}

impl Genre {
    /// New genre, not yet persisted (the identity is assigned on insert).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sentinel entry shown first in genre filter dropdowns.
    pub fn all_genres() -> Self {
        Self {
            id: ALL_GENRES_ID,
            name: "All Genres".to_string(),
            description: None,
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
