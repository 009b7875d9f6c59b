use std::sync::Arc;

use chrono::Utc;

use crate::log_info;
use crate::modules::wishlist::domain::entities::wishlist_item::{
    NewWishlistItem, WishlistItem, WishlistItemId,
};
use crate::modules::wishlist::domain::repositories::wishlist_repository::WishlistRepository;
use crate::shared::errors::AppResult;

pub struct WishlistService {
    wishlist_repo: Arc<dyn WishlistRepository>,
}

impl WishlistService {
    pub fn new(wishlist_repo: Arc<dyn WishlistRepository>) -> Self {
        Self { wishlist_repo }
    }

    pub async fn get_all_items(&self) -> AppResult<Vec<WishlistItem>> {
        self.wishlist_repo.get_all().await
    }

    /// Adds an entry, defaulting `date_added` to now when the caller left
    /// it unset. The stamp is final; updates never touch it.
    pub async fn add_item(&self, new_item: NewWishlistItem) -> AppResult<WishlistItemId> {
        let item = WishlistItem {
            id: 0,
            title: new_item.title,
            author: new_item.author,
            notes: new_item.notes,
            isbn: new_item.isbn,
            date_added: new_item.date_added.unwrap_or_else(Utc::now),
        };

        let id = self.wishlist_repo.add(&item).await?;
        log_info!("Added '{}' to wishlist (ID {})", item.title, id);
        Ok(id)
    }

    pub async fn update_item(&self, item: &WishlistItem) -> AppResult<()> {
        self.wishlist_repo.update(item).await
    }

    pub async fn delete_item(&self, id: WishlistItemId) -> AppResult<()> {
        self.wishlist_repo.delete(id).await?;
        log_info!("Removed wishlist item {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::wishlist::domain::repositories::wishlist_repository::MockWishlistRepository;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn add_defaults_date_added_to_creation_time() {
        let mut repo = MockWishlistRepository::new();
        let before = Utc::now();
        repo.expect_add()
            .withf(move |item| {
                let age = Utc::now() - item.date_added;
                item.date_added >= before && age < Duration::seconds(5)
            })
            .times(1)
            .returning(|_| Ok(1));

        let service = WishlistService::new(Arc::new(repo));
        service
            .add_item(NewWishlistItem::new("Persuasion"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn add_keeps_an_explicit_date_added() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let mut repo = MockWishlistRepository::new();
        repo.expect_add()
            .withf(move |item| item.date_added == stamp)
            .times(1)
            .returning(|_| Ok(2));

        let service = WishlistService::new(Arc::new(repo));
        let mut new_item = NewWishlistItem::new("Emma");
        new_item.date_added = Some(stamp);
        service.add_item(new_item).await.unwrap();
    }
}
