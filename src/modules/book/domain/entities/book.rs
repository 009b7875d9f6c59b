use serde::{Deserialize, Serialize};

use crate::modules::author::domain::entities::author::{Author, AuthorId};
use crate::modules::book::domain::value_objects::reading_status::ReadingStatus;
use crate::modules::genre::domain::entities::genre::{Genre, GenreId};

pub type BookId = i32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
    pub page_count: Option<i32>,
    pub summary: Option<String>,
    pub cover_image_path: Option<String>,
    pub reading_status: Option<ReadingStatus>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
    /// Association sets; duplicate identities are rejected by the mutators.
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
}

impl Book {
    /// New book, not yet persisted and with no associations.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            publication_year: None,
            isbn: None,
            page_count: None,
            summary: None,
            cover_image_path: None,
            reading_status: None,
            rating: None,
            notes: None,
            authors: Vec::new(),
            genres: Vec::new(),
        }
    }

    pub fn add_author(&mut self, author: Author) -> bool {
        if self.authors.iter().any(|a| a.id == author.id) {
            return false;
        }
        self.authors.push(author);
        true
    }

    pub fn remove_author(&mut self, author_id: AuthorId) -> bool {
        let before = self.authors.len();
        self.authors.retain(|a| a.id != author_id);
        self.authors.len() < before
    }

    pub fn add_genre(&mut self, genre: Genre) -> bool {
        if self.genres.iter().any(|g| g.id == genre.id) {
            return false;
        }
        self.genres.push(genre);
        true
    }

    pub fn remove_genre(&mut self, genre_id: GenreId) -> bool {
        let before = self.genres.len();
        self.genres.retain(|g| g.id != genre_id);
        self.genres.len() < before
    }

    pub fn has_genre(&self, genre_id: GenreId) -> bool {
        self.genres.iter().any(|g| g.id == genre_id)
    }

    /// Display string for the author column, e.g. "Jane Austen, John Murray".
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(Author::full_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_author_rejects_duplicate_identities() {
        let mut book = Book::new("Emma");
        let mut austen = Author::new("Jane", "Austen");
        austen.id = 1;

        assert!(book.add_author(austen.clone()));
        assert!(!book.add_author(austen));
        assert_eq!(book.authors.len(), 1);
    }

    #[test]
    fn remove_author_reports_whether_anything_changed() {
        let mut book = Book::new("Emma");
        let mut austen = Author::new("Jane", "Austen");
        austen.id = 1;
        book.add_author(austen);

        assert!(book.remove_author(1));
        assert!(!book.remove_author(1));
        assert!(book.authors.is_empty());
    }

    #[test]
    fn add_genre_rejects_duplicate_identities() {
        let mut book = Book::new("Emma");
        let mut novel = Genre::new("Novel");
        novel.id = 3;

        assert!(book.add_genre(novel.clone()));
        assert!(!book.add_genre(novel));
        assert!(book.has_genre(3));
        assert_eq!(book.genres.len(), 1);
    }

    #[test]
    fn author_names_joins_full_names() {
        let mut book = Book::new("Good Omens");
        let mut a = Author::new("Terry", "Pratchett");
        a.id = 1;
        let mut b = Author::new("Neil", "Gaiman");
        b.id = 2;
        book.add_author(a);
        book.add_author(b);

        assert_eq!(book.author_names(), "Terry Pratchett, Neil Gaiman");
    }
}
