use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type WishlistItemId = i32;

/// A book the user wants but does not own. Author is free text, not a
/// reference into the authors table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub title: String,
    pub author: Option<String>,
    pub notes: Option<String>,
    pub isbn: Option<String>,
    /// Set once at creation, never overwritten afterward.
    pub date_added: DateTime<Utc>,
}

/// Input for creating a wishlist entry. `date_added` left unset defaults
/// to the creation time.
#[derive(Debug, Clone, Default)]
pub struct NewWishlistItem {
    pub title: String,
    pub author: Option<String>,
    pub notes: Option<String>,
    pub isbn: Option<String>,
    pub date_added: Option<DateTime<Utc>>,
}

impl NewWishlistItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
