use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::wishlist::domain::entities::wishlist_item::{WishlistItem, WishlistItemId};
use crate::modules::wishlist::domain::repositories::wishlist_repository::WishlistRepository;
use crate::modules::wishlist::infrastructure::models::{
    NewWishlistRow, WishlistChangeset, WishlistItemModel,
};
use crate::schema::wishlist;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct WishlistRepositoryImpl {
    db: Arc<Database>,
}

impl WishlistRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryImpl {
    async fn get_all(&self) -> AppResult<Vec<WishlistItem>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<WishlistItem>> {
            let mut conn = db.get_connection()?;
            let rows = wishlist::table
                .order(wishlist::date_added.desc())
                .load::<WishlistItemModel>(&mut conn)?;
            Ok(rows.into_iter().map(WishlistItem::from).collect())
        })
        .await?
    }

    async fn find_by_id(&self, id: WishlistItemId) -> AppResult<Option<WishlistItem>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<WishlistItem>> {
            let mut conn = db.get_connection()?;
            let model = wishlist::table
                .filter(wishlist::id.eq(id))
                .first::<WishlistItemModel>(&mut conn)
                .optional()?;
            Ok(model.map(WishlistItem::from))
        })
        .await?
    }

    async fn add(&self, item: &WishlistItem) -> AppResult<WishlistItemId> {
        let db = Arc::clone(&self.db);
        let new_row = NewWishlistRow::from_entity(item);

        task::spawn_blocking(move || -> AppResult<WishlistItemId> {
            let mut conn = db.get_connection()?;
            let saved = diesel::insert_into(wishlist::table)
                .values(&new_row)
                .get_result::<WishlistItemModel>(&mut conn)?;
            Ok(saved.id)
        })
        .await?
    }

    async fn update(&self, item: &WishlistItem) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = item.id;
        let changes = WishlistChangeset::from_entity(item);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(wishlist::table.filter(wishlist::id.eq(id)))
                .set(&changes)
                .execute(&mut conn)?;
            if updated == 0 {
                return Err(AppError::NotFound(format!(
                    "Wishlist item with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: WishlistItemId) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(wishlist::table.filter(wishlist::id.eq(id))).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }
}
