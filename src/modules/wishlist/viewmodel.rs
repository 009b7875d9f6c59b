use std::sync::Arc;

use crate::modules::wishlist::application::service::WishlistService;
use crate::modules::wishlist::domain::entities::wishlist_item::{WishlistItem, WishlistItemId};
use crate::shared::application::observable::{ChangeNotifier, Subscription};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistSortKey {
    Id,
    Title,
    Author,
}

/// State holder behind the wishlist screen. Keeps the full loaded list as
/// the source and exposes a filtered, sorted view, so re-applying the same
/// filter state never loses rows.
pub struct WishlistManagerViewModel {
    wishlist_service: Arc<WishlistService>,

    source: Vec<WishlistItem>,
    visible: Vec<WishlistItem>,
    selected: Option<WishlistItemId>,
    search_term: String,
    sort_key: WishlistSortKey,
    ascending: bool,
    is_loading: bool,
    changes: ChangeNotifier,
}

impl WishlistManagerViewModel {
    pub fn new(wishlist_service: Arc<WishlistService>) -> Self {
        Self {
            wishlist_service,
            source: Vec::new(),
            visible: Vec::new(),
            selected: None,
            search_term: String::new(),
            sort_key: WishlistSortKey::Id,
            ascending: true,
            is_loading: false,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + 'static,
    {
        self.changes.subscribe(callback)
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.visible
    }

    pub fn selected(&self) -> Option<WishlistItemId> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn can_delete(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select(&mut self, id: Option<WishlistItemId>) {
        self.selected = id;
        self.changes.notify("selected");
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filter_and_sort();
    }

    pub fn sort_by(&mut self, key: WishlistSortKey) {
        if self.sort_key == key {
            self.ascending = !self.ascending;
        } else {
            self.sort_key = key;
            self.ascending = true;
        }
        self.apply_filter_and_sort();
    }

    pub async fn load_items(&mut self) -> AppResult<()> {
        self.set_loading(true);
        let result = self.wishlist_service.get_all_items().await;
        self.set_loading(false);

        self.source = result?;
        self.apply_filter_and_sort();
        Ok(())
    }

    pub async fn delete_selected(&mut self) -> AppResult<()> {
        let id = self
            .selected
            .ok_or_else(|| AppError::InvalidInput("No wishlist item selected".to_string()))?;

        self.set_loading(true);
        let result = self.wishlist_service.delete_item(id).await;
        self.set_loading(false);
        result?;

        self.selected = None;
        self.changes.notify("selected");
        self.load_items().await
    }

    fn apply_filter_and_sort(&mut self) {
        let term = self.search_term.trim().to_lowercase();

        let mut items: Vec<WishlistItem> = self
            .source
            .iter()
            .filter(|item| term.is_empty() || matches_search(item, &term))
            .cloned()
            .collect();

        let ascending = self.ascending;
        match self.sort_key {
            WishlistSortKey::Id => items.sort_by(|a, b| order(a.id.cmp(&b.id), ascending)),
            WishlistSortKey::Title => items.sort_by(|a, b| {
                order(
                    a.title.to_lowercase().cmp(&b.title.to_lowercase()),
                    ascending,
                )
            }),
            WishlistSortKey::Author => items.sort_by(|a, b| {
                let a_key = a.author.as_ref().map(|s| s.to_lowercase());
                let b_key = b.author.as_ref().map(|s| s.to_lowercase());
                order(a_key.cmp(&b_key), ascending)
            }),
        }

        self.visible = items;
        self.changes.notify("items");
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.changes.notify("is_loading");
    }
}

fn order(ordering: std::cmp::Ordering, ascending: bool) -> std::cmp::Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

fn matches_search(item: &WishlistItem, term: &str) -> bool {
    item.title.to_lowercase().contains(term)
        || item
            .author
            .as_ref()
            .is_some_and(|a| a.to_lowercase().contains(term))
        || item
            .notes
            .as_ref()
            .is_some_and(|n| n.to_lowercase().contains(term))
        || item
            .isbn
            .as_ref()
            .is_some_and(|i| i.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::wishlist::domain::repositories::wishlist_repository::MockWishlistRepository;
    use chrono::Utc;

    fn item(id: WishlistItemId, title: &str, author: Option<&str>) -> WishlistItem {
        WishlistItem {
            id,
            title: title.to_string(),
            author: author.map(str::to_string),
            notes: None,
            isbn: None,
            date_added: Utc::now(),
        }
    }

    fn vm() -> WishlistManagerViewModel {
        let repo = MockWishlistRepository::new();
        WishlistManagerViewModel::new(Arc::new(WishlistService::new(Arc::new(repo))))
    }

    #[test]
    fn search_matches_title_author_notes_and_isbn() {
        let mut vm = vm();
        let mut with_isbn = item(1, "Emma", Some("Jane Austen"));
        with_isbn.isbn = Some("978-0-14-143958-8".to_string());
        vm.source = vec![
            with_isbn,
            item(2, "Dune", Some("Frank Herbert")),
            item(3, "Hyperion", None),
        ];

        vm.set_search_term("austen");
        assert_eq!(vm.items().len(), 1);
        assert_eq!(vm.items()[0].id, 1);

        vm.set_search_term("143958");
        assert_eq!(vm.items().len(), 1);

        vm.set_search_term("");
        assert_eq!(vm.items().len(), 3);
    }

    #[test]
    fn sorting_toggles_direction_on_repeated_key() {
        let mut vm = vm();
        vm.source = vec![
            item(1, "Dune", None),
            item(2, "Emma", None),
            item(3, "Hyperion", None),
        ];

        vm.sort_by(WishlistSortKey::Title);
        let titles: Vec<&str> = vm.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Emma", "Hyperion"]);

        vm.sort_by(WishlistSortKey::Title);
        let titles: Vec<&str> = vm.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Hyperion", "Emma", "Dune"]);

        // A different key resets to ascending
        vm.sort_by(WishlistSortKey::Id);
        let ids: Vec<WishlistItemId> = vm.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn missing_authors_sort_before_named_ones() {
        let mut vm = vm();
        vm.source = vec![
            item(1, "A", Some("Zweig")),
            item(2, "B", None),
            item(3, "C", Some("Austen")),
        ];

        vm.sort_by(WishlistSortKey::Author);
        let ids: Vec<WishlistItemId> = vm.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
