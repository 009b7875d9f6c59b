use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::wishlist::domain::entities::wishlist_item::WishlistItem;
use crate::schema::wishlist;

// ============= WISHLIST MODELS =============

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = wishlist)]
pub struct WishlistItemModel {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub notes: Option<String>,
    pub isbn: Option<String>,
    pub date_added: DateTime<Utc>,
}

/// Insert payload (write) — the identity is database-generated
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = wishlist)]
pub struct NewWishlistRow {
    pub title: String,
    pub author: Option<String>,
    pub notes: Option<String>,
    pub isbn: Option<String>,
    pub date_added: DateTime<Utc>,
}

/// Update payload (write) — date_added is deliberately absent
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = wishlist)]
#[diesel(treat_none_as_null = true)]
pub struct WishlistChangeset {
    pub title: String,
    pub author: Option<String>,
    pub notes: Option<String>,
    pub isbn: Option<String>,
}

impl From<WishlistItemModel> for WishlistItem {
    fn from(model: WishlistItemModel) -> Self {
        WishlistItem {
            id: model.id,
            title: model.title,
            author: model.author,
            notes: model.notes,
            isbn: model.isbn,
            date_added: model.date_added,
        }
    }
}

impl NewWishlistRow {
    pub fn from_entity(item: &WishlistItem) -> Self {
        Self {
            title: item.title.clone(),
            author: item.author.clone(),
            notes: item.notes.clone(),
            isbn: item.isbn.clone(),
            date_added: item.date_added,
        }
    }
}

impl WishlistChangeset {
    pub fn from_entity(item: &WishlistItem) -> Self {
        Self {
            title: item.title.clone(),
            author: item.author.clone(),
            notes: item.notes.clone(),
            isbn: item.isbn.clone(),
        }
    }
}
