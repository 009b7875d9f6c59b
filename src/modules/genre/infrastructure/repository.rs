use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::genre::domain::entities::genre::{Genre, GenreId};
use crate::modules::genre::domain::repositories::genre_repository::GenreRepository;
use crate::modules::genre::infrastructure::models::{GenreChangeset, GenreModel, NewGenre};
use crate::schema::genres;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct GenreRepositoryImpl {
    db: Arc<Database>,
}

impl GenreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn get_all(&self) -> AppResult<Vec<Genre>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Genre>> {
            let mut conn = db.get_connection()?;
            let rows = genres::table
                .order(genres::name.asc())
                .load::<GenreModel>(&mut conn)?;
            Ok(rows.into_iter().map(Genre::from).collect())
        })
        .await?
    }

    async fn find_by_id(&self, id: GenreId) -> AppResult<Option<Genre>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Genre>> {
            let mut conn = db.get_connection()?;
            let model = genres::table
                .filter(genres::id.eq(id))
                .first::<GenreModel>(&mut conn)
                .optional()?;
            Ok(model.map(Genre::from))
        })
        .await?
    }

    async fn add(&self, genre: &Genre) -> AppResult<GenreId> {
        let db = Arc::clone(&self.db);
        let new_row = NewGenre::from_entity(genre);

        task::spawn_blocking(move || -> AppResult<GenreId> {
            let mut conn = db.get_connection()?;
            let saved = diesel::insert_into(genres::table)
                .values(&new_row)
                .get_result::<GenreModel>(&mut conn)?;
            Ok(saved.id)
        })
        .await?
    }

    async fn update(&self, genre: &Genre) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = genre.id;
        let changes = GenreChangeset::from_entity(genre);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(genres::table.filter(genres::id.eq(id)))
                .set(&changes)
                .execute(&mut conn)?;
            if updated == 0 {
                return Err(AppError::NotFound(format!("Genre with ID {} not found", id)));
            }
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: GenreId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(genres::table.filter(genres::id.eq(id))).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn count(&self) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count = genres::table.count().get_result::<i64>(&mut conn)?;
            Ok(count)
        })
        .await?
    }

    async fn reset_identity(&self) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::sql_query("ALTER SEQUENCE genres_id_seq RESTART WITH 1")
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }
}
