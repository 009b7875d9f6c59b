use crate::modules::author::viewmodel::AuthorManagerViewModel;
use crate::modules::book::viewmodels::book_detail::BookDetailViewModel;
use crate::modules::book::viewmodels::book_list::BookListViewModel;
use crate::modules::genre::viewmodel::GenreManagerViewModel;
use crate::modules::shell::navigation::NavigationRequest;
use crate::modules::wishlist::viewmodel::WishlistManagerViewModel;
use crate::shared::application::observable::{ChangeNotifier, Subscription};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    BookList,
    BookDetail,
    AuthorManager,
    GenreManager,
    WishlistManager,
}

/// Main view-model. Owns the per-screen view-models and switches the
/// active one in response to navigation requests.
pub struct Shell {
    pub book_list: BookListViewModel,
    pub book_detail: BookDetailViewModel,
    pub author_manager: AuthorManagerViewModel,
    pub genre_manager: GenreManagerViewModel,
    pub wishlist_manager: WishlistManagerViewModel,

    active: ActiveView,
    changes: ChangeNotifier,
}

impl Shell {
    pub fn new(
        book_list: BookListViewModel,
        book_detail: BookDetailViewModel,
        author_manager: AuthorManagerViewModel,
        genre_manager: GenreManagerViewModel,
        wishlist_manager: WishlistManagerViewModel,
    ) -> Self {
        Self {
            book_list,
            book_detail,
            author_manager,
            genre_manager,
            wishlist_manager,
            active: ActiveView::BookList,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + 'static,
    {
        self.changes.subscribe(callback)
    }

    pub fn active(&self) -> ActiveView {
        self.active
    }

    /// Load the initial screen.
    pub async fn start(&mut self) -> AppResult<()> {
        self.book_list.load_available_genres().await?;
        self.navigate(NavigationRequest::BookList).await
    }

    pub async fn navigate(&mut self, request: NavigationRequest) -> AppResult<()> {
        match request {
            NavigationRequest::BookList => {
                self.book_list.load_books().await?;
                self.active = ActiveView::BookList;
            }
            NavigationRequest::AddBook => {
                self.book_detail.load_for_new().await?;
                self.active = ActiveView::BookDetail;
            }
            NavigationRequest::EditBook(book_id) => {
                self.book_detail.load_book(book_id).await?;
                self.active = ActiveView::BookDetail;
            }
            NavigationRequest::AuthorManager => {
                self.author_manager.load_authors().await?;
                self.active = ActiveView::AuthorManager;
            }
            NavigationRequest::GenreManager => {
                self.genre_manager.load_genres().await?;
                self.active = ActiveView::GenreManager;
            }
            NavigationRequest::WishlistManager => {
                self.wishlist_manager.load_items().await?;
                self.active = ActiveView::WishlistManager;
            }
        }
        self.changes.notify("active");
        Ok(())
    }
}
