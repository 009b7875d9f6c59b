use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::log_warn;
use crate::modules::author::application::service::AuthorService;
use crate::modules::author::domain::entities::author::{Author, AuthorId};
use crate::modules::book::application::ports::CoverImageStore;
use crate::modules::book::application::service::BookService;
use crate::modules::book::domain::entities::book::{Book, BookId};
use crate::modules::book::domain::value_objects::reading_status::ReadingStatus;
use crate::modules::genre::application::service::GenreService;
use crate::modules::genre::domain::entities::genre::{Genre, GenreId};
use crate::modules::shell::navigation::NavigationRequest;
use crate::shared::application::observable::{ChangeNotifier, Subscription};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// An author offered for selection, with its association checkbox state.
#[derive(Debug, Clone)]
pub struct SelectableAuthor {
    pub author: Author,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct SelectableGenre {
    pub genre: Genre,
    pub selected: bool,
}

/// State holder behind the add/edit book screen.
pub struct BookDetailViewModel {
    book_service: Arc<BookService>,
    author_service: Arc<AuthorService>,
    genre_service: Arc<GenreService>,
    cover_store: Arc<dyn CoverImageStore>,

    current: Book,
    is_new: bool,
    is_loading: bool,
    all_authors: Vec<SelectableAuthor>,
    all_genres: Vec<SelectableGenre>,
    author_search: String,
    genre_search: String,
    changes: ChangeNotifier,
}

impl BookDetailViewModel {
    pub fn new(
        book_service: Arc<BookService>,
        author_service: Arc<AuthorService>,
        genre_service: Arc<GenreService>,
        cover_store: Arc<dyn CoverImageStore>,
    ) -> Self {
        Self {
            book_service,
            author_service,
            genre_service,
            cover_store,
            current: Self::default_book(),
            is_new: true,
            is_loading: false,
            all_authors: Vec::new(),
            all_genres: Vec::new(),
            author_search: String::new(),
            genre_search: String::new(),
            changes: ChangeNotifier::new(),
        }
    }

    fn default_book() -> Book {
        let mut book = Book::new("");
        book.publication_year = Some(Utc::now().year());
        book.reading_status = Some(ReadingStatus::NotStarted);
        book
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + 'static,
    {
        self.changes.subscribe(callback)
    }

    pub fn current(&self) -> &Book {
        &self.current
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Apply edits to the book being worked on.
    pub fn edit(&mut self, apply: impl FnOnce(&mut Book)) {
        apply(&mut self.current);
        self.changes.notify("current_book");
    }

    pub fn set_author_search(&mut self, term: impl Into<String>) {
        self.author_search = term.into();
        self.changes.notify("available_authors");
    }

    pub fn set_genre_search(&mut self, term: impl Into<String>) {
        self.genre_search = term.into();
        self.changes.notify("available_genres");
    }

    pub fn available_authors(&self) -> Vec<&SelectableAuthor> {
        let term = self.author_search.trim().to_lowercase();
        self.all_authors
            .iter()
            .filter(|s| term.is_empty() || s.author.full_name().to_lowercase().contains(&term))
            .collect()
    }

    pub fn available_genres(&self) -> Vec<&SelectableGenre> {
        let term = self.genre_search.trim().to_lowercase();
        self.all_genres
            .iter()
            .filter(|s| term.is_empty() || s.genre.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Prepare a blank form for a new book.
    pub async fn load_for_new(&mut self) -> AppResult<()> {
        self.is_new = true;
        self.current = Self::default_book();
        self.changes.notify("current_book");

        self.load_choices().await?;
        self.mark_selected();
        Ok(())
    }

    /// Load an existing book for editing. A vanished id resets the form to
    /// new-book mode rather than failing.
    pub async fn load_book(&mut self, book_id: BookId) -> AppResult<()> {
        self.set_loading(true);
        let result = self.book_service.get_book_details(book_id).await;
        self.set_loading(false);

        match result? {
            Some(book) => {
                self.is_new = false;
                self.current = book;
                self.changes.notify("current_book");

                self.load_choices().await?;
                self.mark_selected();
                Ok(())
            }
            None => {
                log_warn!("Book {} no longer exists, switching to new-book mode", book_id);
                self.load_for_new().await
            }
        }
    }

    pub fn toggle_author(&mut self, author_id: AuthorId) {
        if let Some(entry) = self
            .all_authors
            .iter_mut()
            .find(|s| s.author.id == author_id)
        {
            entry.selected = !entry.selected;
            if entry.selected {
                self.current.add_author(entry.author.clone());
            } else {
                self.current.remove_author(author_id);
            }
            self.changes.notify("current_book");
        }
    }

    pub fn toggle_genre(&mut self, genre_id: GenreId) {
        if let Some(entry) = self.all_genres.iter_mut().find(|s| s.genre.id == genre_id) {
            entry.selected = !entry.selected;
            if entry.selected {
                self.current.add_genre(entry.genre.clone());
            } else {
                self.current.remove_genre(genre_id);
            }
            self.changes.notify("current_book");
        }
    }

    pub fn can_save(&self) -> bool {
        !self.current.title.trim().is_empty()
    }

    /// Edit-level validation. Failures never reach the repository layer.
    fn validate(&self) -> AppResult<()> {
        Validator::validate_book_title(&self.current.title)?;
        if let Some(isbn) = self.current.isbn.as_deref().filter(|s| !s.is_empty()) {
            Validator::validate_isbn(isbn)?;
        }
        if let Some(rating) = self.current.rating {
            Validator::validate_rating(rating)?;
        }
        if let Some(year) = self.current.publication_year {
            Validator::validate_publication_year(year)?;
        }
        if let Some(pages) = self.current.page_count {
            Validator::validate_page_count(pages)?;
        }
        Ok(())
    }

    /// Save the book (insert or update) and navigate back to the list.
    pub async fn save(&mut self) -> AppResult<NavigationRequest> {
        self.validate()?;

        self.set_loading(true);
        let result = if self.is_new {
            self.book_service.add_book(&self.current).await
        } else {
            match self.book_service.update_book(&self.current).await {
                Ok(()) => Ok(self.current.id),
                Err(e) => Err(e),
            }
        };
        self.set_loading(false);

        self.current.id = result?;
        Ok(NavigationRequest::BookList)
    }

    pub fn cancel(&self) -> NavigationRequest {
        NavigationRequest::BookList
    }

    /// Use a local image file as the cover. Existing books persist the
    /// stored path immediately; new books keep the preview path until the
    /// first save.
    pub async fn set_cover_from_file(&mut self, source_path: &str) -> AppResult<()> {
        if !self.cover_store.validate(source_path) {
            return Err(AppError::ValidationError(
                "Not a supported image file".to_string(),
            ));
        }

        if self.is_new {
            self.current.cover_image_path = Some(source_path.to_string());
            self.changes.notify("current_book");
            return Ok(());
        }

        self.replace_stored_cover(source_path.to_string()).await
    }

    /// Download a remote image and use it as the cover.
    pub async fn set_cover_from_url(&mut self, url: &str) -> AppResult<()> {
        if url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Image URL cannot be empty".to_string(),
            ));
        }

        if self.is_new {
            self.current.cover_image_path = Some(url.to_string());
            self.changes.notify("current_book");
            return Ok(());
        }

        let downloaded = self.cover_store.download(url).await?;
        self.replace_stored_cover(downloaded).await
    }

    pub async fn remove_cover(&mut self) -> AppResult<()> {
        if !self.is_new {
            if let Some(old) = self.current.cover_image_path.take() {
                self.cover_store.delete_cover(&old).await?;
            }
            self.book_service.update_book(&self.current).await?;
        } else {
            self.current.cover_image_path = None;
        }
        self.changes.notify("current_book");
        Ok(())
    }

    async fn replace_stored_cover(&mut self, source_path: String) -> AppResult<()> {
        self.set_loading(true);
        let result = self.store_and_persist_cover(source_path).await;
        self.set_loading(false);
        result?;

        self.changes.notify("current_book");
        Ok(())
    }

    async fn store_and_persist_cover(&mut self, source_path: String) -> AppResult<()> {
        if let Some(old) = self
            .current
            .cover_image_path
            .clone()
            .filter(|p| p != &source_path)
        {
            self.cover_store.delete_cover(&old).await?;
        }

        let stored = self
            .cover_store
            .save_cover(&source_path, self.current.id)
            .await?;
        self.current.cover_image_path = Some(stored);
        self.book_service.update_book(&self.current).await
    }

    async fn load_choices(&mut self) -> AppResult<()> {
        let authors = self.author_service.get_all_authors().await?;
        self.all_authors = authors
            .into_iter()
            .map(|author| SelectableAuthor {
                author,
                selected: false,
            })
            .collect();

        let genres = self.genre_service.get_all_genres().await?;
        self.all_genres = genres
            .into_iter()
            .map(|genre| SelectableGenre {
                genre,
                selected: false,
            })
            .collect();

        self.changes.notify("available_authors");
        self.changes.notify("available_genres");
        Ok(())
    }

    fn mark_selected(&mut self) {
        for entry in &mut self.all_authors {
            entry.selected = self
                .current
                .authors
                .iter()
                .any(|a| a.id == entry.author.id);
        }
        for entry in &mut self.all_genres {
            entry.selected = self.current.has_genre(entry.genre.id);
        }
        self.changes.notify("available_authors");
        self.changes.notify("available_genres");
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.changes.notify("is_loading");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::author::domain::repositories::author_repository::MockAuthorRepository;
    use crate::modules::book::application::ports::MockCoverImageStore;
    use crate::modules::book::domain::repositories::book_repository::MockBookRepository;
    use crate::modules::genre::domain::repositories::genre_repository::MockGenreRepository;

    fn vm_with(
        book_repo: MockBookRepository,
        author_repo: MockAuthorRepository,
        genre_repo: MockGenreRepository,
    ) -> BookDetailViewModel {
        BookDetailViewModel::new(
            Arc::new(BookService::new(Arc::new(book_repo))),
            Arc::new(AuthorService::new(Arc::new(author_repo))),
            Arc::new(GenreService::new(Arc::new(genre_repo))),
            Arc::new(MockCoverImageStore::new()),
        )
    }

    fn stub_choices(author_repo: &mut MockAuthorRepository, genre_repo: &mut MockGenreRepository) {
        author_repo.expect_get_all().returning(|| {
            let mut austen = Author::new("Jane", "Austen");
            austen.id = 1;
            Ok(vec![austen])
        });
        genre_repo.expect_get_all().returning(|| {
            let mut novel = Genre::new("Novel");
            novel.id = 1;
            Ok(vec![novel])
        });
    }

    #[tokio::test]
    async fn loading_a_vanished_book_resets_to_new_book_mode() {
        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_find_by_id_with_details()
            .returning(|_| Ok(None));
        let mut author_repo = MockAuthorRepository::new();
        let mut genre_repo = MockGenreRepository::new();
        stub_choices(&mut author_repo, &mut genre_repo);

        let mut vm = vm_with(book_repo, author_repo, genre_repo);
        vm.load_book(42).await.unwrap();

        assert!(vm.is_new());
        assert!(vm.current().title.is_empty());
    }

    #[tokio::test]
    async fn loading_an_existing_book_marks_its_associations_selected() {
        let mut book_repo = MockBookRepository::new();
        book_repo.expect_find_by_id_with_details().returning(|id| {
            let mut book = Book::new("Emma");
            book.id = id;
            let mut austen = Author::new("Jane", "Austen");
            austen.id = 1;
            book.add_author(austen);
            Ok(Some(book))
        });
        let mut author_repo = MockAuthorRepository::new();
        let mut genre_repo = MockGenreRepository::new();
        stub_choices(&mut author_repo, &mut genre_repo);

        let mut vm = vm_with(book_repo, author_repo, genre_repo);
        vm.load_book(1).await.unwrap();

        assert!(!vm.is_new());
        assert!(vm.all_authors[0].selected);
        assert!(!vm.all_genres[0].selected);
    }

    #[tokio::test]
    async fn save_rejects_a_blank_title_before_any_repository_call() {
        let mut book_repo = MockBookRepository::new();
        book_repo.expect_add().times(0);
        book_repo.expect_update().times(0);

        let mut vm = vm_with(
            book_repo,
            MockAuthorRepository::new(),
            MockGenreRepository::new(),
        );
        let err = vm.save().await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn save_rejects_out_of_range_rating() {
        let mut book_repo = MockBookRepository::new();
        book_repo.expect_add().times(0);

        let mut vm = vm_with(
            book_repo,
            MockAuthorRepository::new(),
            MockGenreRepository::new(),
        );
        vm.edit(|b| {
            b.title = "Emma".to_string();
            b.rating = Some(9);
        });

        assert!(matches!(
            vm.save().await.unwrap_err(),
            AppError::ValidationError(_)
        ));
    }

    #[tokio::test]
    async fn save_routes_new_books_to_add_and_returns_to_the_list() {
        let mut book_repo = MockBookRepository::new();
        book_repo.expect_find_by_isbn().returning(|_| Ok(None));
        book_repo
            .expect_add()
            .withf(|b| b.title == "Emma" && b.authors.len() == 1)
            .times(1)
            .returning(|_| Ok(7));
        let mut author_repo = MockAuthorRepository::new();
        let mut genre_repo = MockGenreRepository::new();
        stub_choices(&mut author_repo, &mut genre_repo);

        let mut vm = vm_with(book_repo, author_repo, genre_repo);
        vm.load_for_new().await.unwrap();
        vm.edit(|b| {
            b.title = "Emma".to_string();
            b.isbn = Some("978-0-14-143958-8".to_string());
        });
        vm.toggle_author(1);

        let nav = vm.save().await.unwrap();
        assert_eq!(nav, NavigationRequest::BookList);
        assert_eq!(vm.current().id, 7);
    }

    #[tokio::test]
    async fn toggling_an_author_twice_leaves_no_association() {
        let mut author_repo = MockAuthorRepository::new();
        let mut genre_repo = MockGenreRepository::new();
        stub_choices(&mut author_repo, &mut genre_repo);

        let mut vm = vm_with(MockBookRepository::new(), author_repo, genre_repo);
        vm.load_for_new().await.unwrap();

        vm.toggle_author(1);
        assert_eq!(vm.current().authors.len(), 1);
        vm.toggle_author(1);
        assert!(vm.current().authors.is_empty());
    }
}
