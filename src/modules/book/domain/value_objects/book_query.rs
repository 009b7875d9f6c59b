use crate::modules::book::domain::value_objects::reading_status::ReadingStatus;
use crate::modules::genre::domain::entities::genre::GenreId;

/// Repository-level search criteria. All present filters are ANDed; a
/// genre id of 0 means no genre restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub term: Option<String>,
    pub reading_status: Option<ReadingStatus>,
    pub genre_id: Option<GenreId>,
}

impl BookQuery {
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.reading_status = Some(status);
        self
    }

    pub fn with_genre(mut self, genre_id: GenreId) -> Self {
        self.genre_id = Some(genre_id);
        self
    }
}
