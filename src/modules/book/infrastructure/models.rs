use std::str::FromStr;

use diesel::prelude::*;

use crate::modules::author::domain::entities::author::Author;
use crate::modules::author::infrastructure::models::AuthorModel;
use crate::modules::book::domain::entities::book::Book;
use crate::modules::book::domain::value_objects::reading_status::ReadingStatus;
use crate::modules::genre::domain::entities::genre::Genre;
use crate::modules::genre::infrastructure::models::GenreModel;
use crate::schema::{book_authors, book_genres, books};

// ============= BOOK MODELS =============

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct BookModel {
    pub id: i32,
    pub title: String,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
    pub page_count: Option<i32>,
    pub summary: Option<String>,
    pub cover_image_path: Option<String>,
    pub reading_status: Option<String>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
}

/// Insert payload (write) — the identity is database-generated
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct NewBook {
    pub title: String,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
    pub page_count: Option<i32>,
    pub summary: Option<String>,
    pub cover_image_path: Option<String>,
    pub reading_status: Option<String>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
}

/// Update payload (write) — full-row update keyed by identity
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = books)]
#[diesel(treat_none_as_null = true)]
pub struct BookChangeset {
    pub title: String,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
    pub page_count: Option<i32>,
    pub summary: Option<String>,
    pub cover_image_path: Option<String>,
    pub reading_status: Option<String>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
}

// ============= BOOK-AUTHOR ASSOCIATION (join) =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(BookModel, foreign_key = book_id))]
#[diesel(belongs_to(AuthorModel, foreign_key = author_id))]
#[diesel(table_name = book_authors)]
#[diesel(primary_key(book_id, author_id))]
pub struct BookAuthorRow {
    pub book_id: i32,
    pub author_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = book_authors)]
pub struct NewBookAuthor {
    pub book_id: i32,
    pub author_id: i32,
}

// ============= BOOK-GENRE ASSOCIATION (join) =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(BookModel, foreign_key = book_id))]
#[diesel(belongs_to(GenreModel, foreign_key = genre_id))]
#[diesel(table_name = book_genres)]
#[diesel(primary_key(book_id, genre_id))]
pub struct BookGenreRow {
    pub book_id: i32,
    pub genre_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = book_genres)]
pub struct NewBookGenre {
    pub book_id: i32,
    pub genre_id: i32,
}

impl BookModel {
    pub fn into_entity(self, authors: Vec<Author>, genres: Vec<Genre>) -> Book {
        Book {
            id: self.id,
            title: self.title,
            publication_year: self.publication_year,
            isbn: self.isbn,
            page_count: self.page_count,
            summary: self.summary,
            cover_image_path: self.cover_image_path,
            reading_status: self
                .reading_status
                .as_deref()
                .and_then(|s| ReadingStatus::from_str(s).ok()),
            rating: self.rating,
            notes: self.notes,
            authors,
            genres,
        }
    }
}

impl NewBook {
    pub fn from_entity(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            publication_year: book.publication_year,
            isbn: book.isbn.clone(),
            page_count: book.page_count,
            summary: book.summary.clone(),
            cover_image_path: book.cover_image_path.clone(),
            reading_status: book.reading_status.map(|s| s.to_string()),
            rating: book.rating,
            notes: book.notes.clone(),
        }
    }
}

impl BookChangeset {
    pub fn from_entity(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            publication_year: book.publication_year,
            isbn: book.isbn.clone(),
            page_count: book.page_count,
            summary: book.summary.clone(),
            cover_image_path: book.cover_image_path.clone(),
            reading_status: book.reading_status.map(|s| s.to_string()),
            rating: book.rating,
            notes: book.notes.clone(),
        }
    }
}
