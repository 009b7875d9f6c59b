use async_trait::async_trait;

use crate::modules::wishlist::domain::entities::wishlist_item::{WishlistItem, WishlistItemId};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// All wishlist entries, newest first.
    async fn get_all(&self) -> AppResult<Vec<WishlistItem>>;
    async fn find_by_id(&self, id: WishlistItemId) -> AppResult<Option<WishlistItem>>;
    /// Inserts a row and returns the generated identity.
    async fn add(&self, item: &WishlistItem) -> AppResult<WishlistItemId>;
    /// Updates every column except `date_added`.
    async fn update(&self, item: &WishlistItem) -> AppResult<()>;
    /// Removing an absent row is not an error.
    async fn delete(&self, id: WishlistItemId) -> AppResult<()>;
}
