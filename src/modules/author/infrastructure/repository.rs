use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::author::domain::entities::author::{Author, AuthorId};
use crate::modules::author::domain::repositories::author_repository::AuthorRepository;
use crate::modules::author::infrastructure::models::{AuthorChangeset, AuthorModel, NewAuthor};
use crate::schema::authors;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct AuthorRepositoryImpl {
    db: Arc<Database>,
}

impl AuthorRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryImpl {
    async fn get_all(&self) -> AppResult<Vec<Author>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Author>> {
            let mut conn = db.get_connection()?;
            let rows = authors::table
                .order((authors::last_name.asc(), authors::first_name.asc()))
                .load::<AuthorModel>(&mut conn)?;
            Ok(rows.into_iter().map(Author::from).collect())
        })
        .await?
    }

    async fn find_by_id(&self, id: AuthorId) -> AppResult<Option<Author>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Author>> {
            let mut conn = db.get_connection()?;
            let model = authors::table
                .filter(authors::id.eq(id))
                .first::<AuthorModel>(&mut conn)
                .optional()?;
            Ok(model.map(Author::from))
        })
        .await?
    }

    async fn add(&self, author: &Author) -> AppResult<AuthorId> {
        let db = Arc::clone(&self.db);
        let new_row = NewAuthor::from_entity(author);

        task::spawn_blocking(move || -> AppResult<AuthorId> {
            let mut conn = db.get_connection()?;
            let saved = diesel::insert_into(authors::table)
                .values(&new_row)
                .get_result::<AuthorModel>(&mut conn)?;
            Ok(saved.id)
        })
        .await?
    }

    async fn update(&self, author: &Author) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = author.id;
        let changes = AuthorChangeset::from_entity(author);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(authors::table.filter(authors::id.eq(id)))
                .set(&changes)
                .execute(&mut conn)?;
            if updated == 0 {
                return Err(AppError::NotFound(format!(
                    "Author with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: AuthorId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(authors::table.filter(authors::id.eq(id))).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }
}
