use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use tokio::task;

use crate::modules::author::domain::entities::author::{Author, AuthorId};
use crate::modules::author::infrastructure::models::AuthorModel;
use crate::modules::book::domain::entities::book::{Book, BookId};
use crate::modules::book::domain::repositories::book_repository::BookRepository;
use crate::modules::book::domain::value_objects::book_query::BookQuery;
use crate::modules::book::infrastructure::models::{
    BookAuthorRow, BookChangeset, BookGenreRow, BookModel, NewBook, NewBookAuthor, NewBookGenre,
};
use crate::modules::genre::domain::entities::genre::{Genre, GenreId, ALL_GENRES_ID};
use crate::modules::genre::infrastructure::models::GenreModel;
use crate::schema::{authors, book_authors, book_genres, books, genres};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct BookRepositoryImpl {
    db: Arc<Database>,
}

impl BookRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Populate author and genre sets for a batch of book rows with two
    /// grouped join loads instead of per-book queries.
    fn load_relations_blocking(
        conn: &mut PgConnection,
        book_models: Vec<BookModel>,
    ) -> AppResult<Vec<Book>> {
        if book_models.is_empty() {
            return Ok(Vec::new());
        }

        let rows_a: Vec<(BookAuthorRow, AuthorModel)> = BookAuthorRow::belonging_to(&book_models)
            .inner_join(authors::table)
            .order((authors::last_name.asc(), authors::first_name.asc()))
            .select((book_authors::all_columns, authors::all_columns))
            .load::<(BookAuthorRow, AuthorModel)>(conn)?;
        let grouped_a = rows_a.grouped_by(&book_models);
        let authors_grouped: HashMap<BookId, Vec<Author>> = book_models
            .iter()
            .zip(grouped_a)
            .map(|(b, pairs)| {
                let v = pairs
                    .into_iter()
                    .map(|(_, a)| Author::from(a))
                    .collect::<Vec<_>>();
                (b.id, v)
            })
            .collect();

        let rows_g: Vec<(BookGenreRow, GenreModel)> = BookGenreRow::belonging_to(&book_models)
            .inner_join(genres::table)
            .order(genres::name.asc())
            .select((book_genres::all_columns, genres::all_columns))
            .load::<(BookGenreRow, GenreModel)>(conn)?;
        let grouped_g = rows_g.grouped_by(&book_models);
        let genres_grouped: HashMap<BookId, Vec<Genre>> = book_models
            .iter()
            .zip(grouped_g)
            .map(|(b, pairs)| {
                let v = pairs
                    .into_iter()
                    .map(|(_, g)| Genre::from(g))
                    .collect::<Vec<_>>();
                (b.id, v)
            })
            .collect();

        let out = book_models
            .into_iter()
            .map(|m| {
                let authors = authors_grouped.get(&m.id).cloned().unwrap_or_default();
                let genres = genres_grouped.get(&m.id).cloned().unwrap_or_default();
                m.into_entity(authors, genres)
            })
            .collect();

        Ok(out)
    }

    fn insert_association_rows(
        conn: &mut PgConnection,
        book_id: BookId,
        author_ids: &[AuthorId],
        genre_ids: &[GenreId],
    ) -> AppResult<()> {
        for author_id in author_ids {
            diesel::insert_into(book_authors::table)
                .values(NewBookAuthor {
                    book_id,
                    author_id: *author_id,
                })
                .on_conflict_do_nothing()
                .execute(conn)?;
        }
        for genre_id in genre_ids {
            diesel::insert_into(book_genres::table)
                .values(NewBookGenre {
                    book_id,
                    genre_id: *genre_id,
                })
                .on_conflict_do_nothing()
                .execute(conn)?;
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn get_all_with_details(&self) -> AppResult<Vec<Book>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Book>> {
            let mut conn = db.get_connection()?;
            let models = books::table
                .order(books::title.asc())
                .load::<BookModel>(&mut conn)?;
            Self::load_relations_blocking(&mut conn, models)
        })
        .await?
    }

    async fn find_by_id_with_details(&self, id: BookId) -> AppResult<Option<Book>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Book>> {
            let mut conn = db.get_connection()?;
            let model = books::table
                .filter(books::id.eq(id))
                .first::<BookModel>(&mut conn)
                .optional()?;
            match model {
                Some(m) => {
                    let loaded = Self::load_relations_blocking(&mut conn, vec![m])?;
                    Ok(loaded.into_iter().next())
                }
                None => Ok(None),
            }
        })
        .await?
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let db = Arc::clone(&self.db);
        let isbn = isbn.to_string();

        task::spawn_blocking(move || -> AppResult<Option<Book>> {
            let mut conn = db.get_connection()?;
            let model = books::table
                .filter(books::isbn.eq(&isbn))
                .first::<BookModel>(&mut conn)
                .optional()?;
            Ok(model.map(|m| m.into_entity(Vec::new(), Vec::new())))
        })
        .await?
    }

    async fn add(&self, book: &Book) -> AppResult<BookId> {
        let db = Arc::clone(&self.db);
        let new_row = NewBook::from_entity(book);
        let author_ids: Vec<AuthorId> = book.authors.iter().map(|a| a.id).collect();
        let genre_ids: Vec<GenreId> = book.genres.iter().map(|g| g.id).collect();

        task::spawn_blocking(move || -> AppResult<BookId> {
            let mut conn = db.get_connection()?;

            conn.transaction::<BookId, AppError, _>(|conn| {
                let saved = diesel::insert_into(books::table)
                    .values(&new_row)
                    .get_result::<BookModel>(conn)?;
                Self::insert_association_rows(conn, saved.id, &author_ids, &genre_ids)?;
                Ok(saved.id)
            })
        })
        .await?
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = book.id;
        let changes = BookChangeset::from_entity(book);
        let author_ids: Vec<AuthorId> = book.authors.iter().map(|a| a.id).collect();
        let genre_ids: Vec<GenreId> = book.genres.iter().map(|g| g.id).collect();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            // Replace-all association semantics: drop every join row for the
            // book and re-insert the current sets, in the same transaction
            // as the row update.
            conn.transaction::<_, AppError, _>(|conn| {
                let updated = diesel::update(books::table.filter(books::id.eq(id)))
                    .set(&changes)
                    .execute(conn)?;
                if updated == 0 {
                    return Err(AppError::NotFound(format!("Book with ID {} not found", id)));
                }

                diesel::delete(book_authors::table.filter(book_authors::book_id.eq(id)))
                    .execute(conn)?;
                diesel::delete(book_genres::table.filter(book_genres::book_id.eq(id)))
                    .execute(conn)?;

                Self::insert_association_rows(conn, id, &author_ids, &genre_ids)
            })
        })
        .await?
    }

    async fn delete(&self, id: BookId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(books::table.filter(books::id.eq(id))).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn search(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let db = Arc::clone(&self.db);
        let query = query.clone();

        task::spawn_blocking(move || -> AppResult<Vec<Book>> {
            let mut conn = db.get_connection()?;

            let mut sql = books::table.into_boxed();

            if let Some(term) = query.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                let pattern = format!("%{}%", term);
                let author_match = exists(
                    book_authors::table
                        .inner_join(authors::table)
                        .filter(book_authors::book_id.eq(books::id))
                        .filter(
                            authors::first_name
                                .concat(" ")
                                .concat(authors::last_name)
                                .ilike(pattern.clone()),
                        ),
                );
                sql = sql.filter(
                    books::title
                        .ilike(pattern.clone())
                        .nullable()
                        .or(books::summary.ilike(pattern.clone()))
                        .or(books::isbn.ilike(pattern))
                        .or(author_match.nullable()),
                );
            }

            if let Some(status) = query.reading_status {
                sql = sql.filter(books::reading_status.eq(status.to_string()));
            }

            if let Some(genre_id) = query.genre_id.filter(|g| *g != ALL_GENRES_ID) {
                sql = sql.filter(exists(
                    book_genres::table
                        .filter(book_genres::book_id.eq(books::id))
                        .filter(book_genres::genre_id.eq(genre_id)),
                ));
            }

            let models = sql.order(books::title.asc()).load::<BookModel>(&mut conn)?;
            Self::load_relations_blocking(&mut conn, models)
        })
        .await?
    }
}
