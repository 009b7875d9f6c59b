use std::cmp::Ordering;
use std::sync::Arc;

use crate::modules::book::application::service::BookService;
use crate::modules::book::domain::entities::book::{Book, BookId};
use crate::modules::book::domain::value_objects::book_query::BookQuery;
use crate::modules::book::domain::value_objects::reading_status::ReadingStatus;
use crate::modules::genre::application::service::GenreService;
use crate::modules::genre::domain::entities::genre::{Genre, GenreId, ALL_GENRES_ID};
use crate::modules::shell::navigation::NavigationRequest;
use crate::modules::wishlist::application::service::WishlistService;
use crate::modules::wishlist::domain::entities::wishlist_item::NewWishlistItem;
use crate::shared::application::observable::{ChangeNotifier, Subscription};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSortKey {
    Title,
    Authors,
    ReadingStatus,
    Rating,
    PageCount,
    PublicationYear,
}

/// State holder behind the book list screen, including the in-memory
/// filter/sort pipeline. The full loaded list is kept as the source;
/// every filter/sort change rebuilds the visible list from it, so
/// applying the same state twice yields the same result.
pub struct BookListViewModel {
    book_service: Arc<BookService>,
    wishlist_service: Arc<WishlistService>,
    genre_service: Arc<GenreService>,

    source: Vec<Book>,
    visible: Vec<Book>,
    available_genres: Vec<Genre>,
    selected: Option<BookId>,
    search_term: String,
    /// None means the "All" sentinel.
    status_filter: Option<ReadingStatus>,
    /// None or `ALL_GENRES_ID` means no genre restriction.
    genre_filter: Option<GenreId>,
    sort_key: BookSortKey,
    ascending: bool,
    is_loading: bool,
    changes: ChangeNotifier,
}

impl BookListViewModel {
    pub fn new(
        book_service: Arc<BookService>,
        wishlist_service: Arc<WishlistService>,
        genre_service: Arc<GenreService>,
    ) -> Self {
        Self {
            book_service,
            wishlist_service,
            genre_service,
            source: Vec::new(),
            visible: Vec::new(),
            available_genres: Vec::new(),
            selected: None,
            search_term: String::new(),
            status_filter: None,
            genre_filter: None,
            sort_key: BookSortKey::Title,
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

    pub fn books(&self) -> &[Book] {
        &self.visible
    }

    pub fn available_genres(&self) -> &[Genre] {
        &self.available_genres
    }

    pub fn selected(&self) -> Option<BookId> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn sort_state(&self) -> (BookSortKey, bool) {
        (self.sort_key, self.ascending)
    }

    pub fn can_edit_or_delete(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select(&mut self, id: Option<BookId>) {
        self.selected = id;
        self.changes.notify("selected");
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filter_and_sort();
    }

    pub fn set_status_filter(&mut self, status: Option<ReadingStatus>) {
        self.status_filter = status;
        self.apply_filter_and_sort();
    }

    pub fn set_genre_filter(&mut self, genre_id: Option<GenreId>) {
        self.genre_filter = genre_id;
        self.apply_filter_and_sort();
    }

    /// Clicking the active key again reverses the direction; a new key
    /// starts ascending.
    pub fn sort_by(&mut self, key: BookSortKey) {
        if self.sort_key == key {
            self.ascending = !self.ascending;
        } else {
            self.sort_key = key;
            self.ascending = true;
        }
        self.apply_filter_and_sort();
    }

    /// Full refresh from storage, then re-apply the current filter/sort.
    pub async fn load_books(&mut self) -> AppResult<()> {
        self.set_loading(true);
        let result = self.book_service.get_all_books_with_details().await;
        self.set_loading(false);

        self.source = result?;
        self.apply_filter_and_sort();
        Ok(())
    }

    /// Genres for the filter dropdown, with the "All Genres" sentinel first.
    pub async fn load_available_genres(&mut self) -> AppResult<()> {
        let mut genres = self.genre_service.get_all_genres().await?;
        genres.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        self.available_genres = Vec::with_capacity(genres.len() + 1);
        self.available_genres.push(Genre::all_genres());
        self.available_genres.extend(genres);
        self.changes.notify("available_genres");
        Ok(())
    }

    /// Storage-backed search with the current term/status/genre criteria.
    /// The result becomes the new source collection.
    pub async fn search(&mut self) -> AppResult<()> {
        let mut query = BookQuery::default();
        let term = self.search_term.trim();
        if !term.is_empty() {
            query = query.with_term(term);
        }
        if let Some(status) = self.status_filter {
            query = query.with_status(status);
        }
        if let Some(genre_id) = self.genre_filter.filter(|g| *g != ALL_GENRES_ID) {
            query = query.with_genre(genre_id);
        }

        self.set_loading(true);
        let result = self.book_service.search_books(&query).await;
        self.set_loading(false);

        self.source = result?;
        self.apply_filter_and_sort();
        Ok(())
    }

    pub async fn delete_selected(&mut self) -> AppResult<()> {
        let id = self
            .selected
            .ok_or_else(|| AppError::InvalidInput("No book selected".to_string()))?;

        self.set_loading(true);
        let result = self.book_service.delete_book(id).await;
        self.set_loading(false);
        result?;

        self.selected = None;
        self.changes.notify("selected");
        self.load_books().await
    }

    pub async fn add_selected_to_wishlist(&mut self) -> AppResult<()> {
        let book = self
            .selected
            .and_then(|id| self.source.iter().find(|b| b.id == id))
            .ok_or_else(|| AppError::InvalidInput("No book selected".to_string()))?;

        let mut item = NewWishlistItem::new(book.title.clone());
        if !book.authors.is_empty() {
            item = item.with_author(book.author_names());
        }
        if let Some(isbn) = book.isbn.as_deref().filter(|s| !s.is_empty()) {
            item = item.with_isbn(isbn);
        }

        self.set_loading(true);
        let result = self.wishlist_service.add_item(item).await;
        self.set_loading(false);
        result?;
        Ok(())
    }

    pub fn add_book(&self) -> NavigationRequest {
        NavigationRequest::AddBook
    }

    pub fn edit_selected(&self) -> Option<NavigationRequest> {
        self.selected.map(NavigationRequest::EditBook)
    }

    fn apply_filter_and_sort(&mut self) {
        let term = self.search_term.trim().to_lowercase();
        let status = self.status_filter;
        let genre = self.genre_filter.filter(|g| *g != ALL_GENRES_ID);

        let mut books: Vec<Book> = self
            .source
            .iter()
            .filter(|b| passes_filters(b, &term, status, genre))
            .cloned()
            .collect();

        apply_sort(&mut books, self.sort_key, self.ascending);

        self.visible = books;
        self.changes.notify("books");
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.changes.notify("is_loading");
    }
}

// --- Filter/sort pipeline ---

fn matches_search(book: &Book, term: &str) -> bool {
    book.title.to_lowercase().contains(term)
        || book
            .authors
            .iter()
            .any(|a| a.full_name().to_lowercase().contains(term))
        || book
            .isbn
            .as_ref()
            .is_some_and(|isbn| isbn.to_lowercase().contains(term))
        || book
            .summary
            .as_ref()
            .is_some_and(|summary| summary.to_lowercase().contains(term))
}

fn passes_filters(
    book: &Book,
    term: &str,
    status: Option<ReadingStatus>,
    genre: Option<GenreId>,
) -> bool {
    (term.is_empty() || matches_search(book, term))
        && status.map_or(true, |s| book.reading_status == Some(s))
        && genre.map_or(true, |g| book.has_genre(g))
}

/// Rank for the status sort; absent statuses go last.
fn status_rank(book: &Book) -> u8 {
    book.reading_status.map_or(u8::MAX, ReadingStatus::sort_rank)
}

fn title_key(book: &Book) -> String {
    book.title.to_lowercase()
}

/// First author's (last name, first name), the tie-break pair for the
/// author sort. Books without authors sort before named ones.
fn first_author_key(book: &Book) -> Option<(String, String)> {
    book.authors
        .first()
        .map(|a| (a.last_name.to_lowercase(), a.first_name.to_lowercase()))
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

fn apply_sort(books: &mut [Book], key: BookSortKey, ascending: bool) {
    match key {
        BookSortKey::Title => {
            books.sort_by(|a, b| directed(title_key(a).cmp(&title_key(b)), ascending))
        }
        BookSortKey::Authors => books.sort_by(|a, b| {
            directed(first_author_key(a).cmp(&first_author_key(b)), ascending)
        }),
        // Fixed domain ordering, with title ascending as the secondary key
        // in both directions.
        BookSortKey::ReadingStatus => books.sort_by(|a, b| {
            directed(status_rank(a).cmp(&status_rank(b)), ascending)
                .then_with(|| title_key(a).cmp(&title_key(b)))
        }),
        BookSortKey::Rating => {
            books.sort_by(|a, b| directed(a.rating.cmp(&b.rating), ascending))
        }
        BookSortKey::PageCount => {
            books.sort_by(|a, b| directed(a.page_count.cmp(&b.page_count), ascending))
        }
        BookSortKey::PublicationYear => books.sort_by(|a, b| {
            directed(a.publication_year.cmp(&b.publication_year), ascending)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::author::domain::entities::author::Author;
    use crate::modules::genre::domain::entities::genre::Genre;

    fn author(id: i32, first: &str, last: &str) -> Author {
        let mut a = Author::new(first, last);
        a.id = id;
        a
    }

    fn genre(id: GenreId, name: &str) -> Genre {
        let mut g = Genre::new(name);
        g.id = id;
        g
    }

    fn book(id: BookId, title: &str) -> Book {
        let mut b = Book::new(title);
        b.id = id;
        b
    }

    fn library() -> Vec<Book> {
        let mut emma = book(1, "Emma");
        emma.add_author(author(1, "Jane", "Austen"));
        emma.add_genre(genre(1, "Novel"));
        emma.isbn = Some("978-0-14-143958-8".to_string());
        emma.reading_status = Some(ReadingStatus::Completed);
        emma.rating = Some(5);
        emma.page_count = Some(474);
        emma.publication_year = Some(1815);

        let mut dune = book(2, "Dune");
        dune.add_author(author(2, "Frank", "Herbert"));
        dune.add_genre(genre(2, "Science Fiction"));
        dune.summary = Some("Spice, sandworms and the desert planet Arrakis".to_string());
        dune.reading_status = Some(ReadingStatus::InProgress);
        dune.rating = Some(4);
        dune.page_count = Some(412);
        dune.publication_year = Some(1965);

        let mut hyperion = book(3, "Hyperion");
        hyperion.add_author(author(3, "Dan", "Simmons"));
        hyperion.add_genre(genre(2, "Science Fiction"));
        hyperion.reading_status = Some(ReadingStatus::NotStarted);
        hyperion.publication_year = Some(1989);

        vec![emma, dune, hyperion]
    }

    fn filtered(
        books: &[Book],
        term: &str,
        status: Option<ReadingStatus>,
        genre: Option<GenreId>,
    ) -> Vec<BookId> {
        let term = term.trim().to_lowercase();
        books
            .iter()
            .filter(|b| passes_filters(b, &term, status, genre.filter(|g| *g != ALL_GENRES_ID)))
            .map(|b| b.id)
            .collect()
    }

    #[test]
    fn text_filter_matches_title_author_isbn_and_summary() {
        let books = library();

        assert_eq!(filtered(&books, "emma", None, None), vec![1]);
        assert_eq!(filtered(&books, "jane aus", None, None), vec![1]);
        assert_eq!(filtered(&books, "143958", None, None), vec![1]);
        assert_eq!(filtered(&books, "sandworms", None, None), vec![2]);
        assert_eq!(filtered(&books, "", None, None), vec![1, 2, 3]);
        assert!(filtered(&books, "dickens", None, None).is_empty());
    }

    #[test]
    fn filters_compose_with_and() {
        let books = library();

        // Genre alone
        assert_eq!(filtered(&books, "", None, Some(2)), vec![2, 3]);
        // Genre AND status
        assert_eq!(
            filtered(&books, "", Some(ReadingStatus::InProgress), Some(2)),
            vec![2]
        );
        // All three
        assert!(filtered(&books, "hyperion", Some(ReadingStatus::InProgress), Some(2)).is_empty());
    }

    #[test]
    fn sentinel_values_disable_their_filters() {
        let books = library();

        assert_eq!(filtered(&books, "", None, Some(ALL_GENRES_ID)), vec![1, 2, 3]);
        assert_eq!(filtered(&books, "   ", None, None).len(), 3);
    }

    #[test]
    fn title_sort_toggles_to_exact_reverse() {
        let mut books = library();
        apply_sort(&mut books, BookSortKey::Title, true);
        let ascending: Vec<BookId> = books.iter().map(|b| b.id).collect();
        assert_eq!(ascending, vec![2, 1, 3]);

        apply_sort(&mut books, BookSortKey::Title, false);
        let descending: Vec<BookId> = books.iter().map(|b| b.id).collect();
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn author_sort_uses_last_name_then_first_name() {
        let mut books = library();
        let mut second_austen = book(4, "Persuasion");
        second_austen.add_author(author(4, "Cassandra", "Austen"));
        books.push(second_austen);

        apply_sort(&mut books, BookSortKey::Authors, true);
        let ids: Vec<BookId> = books.iter().map(|b| b.id).collect();
        // Austen (Cassandra), Austen (Jane), Herbert, Simmons
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn books_without_authors_sort_first_ascending() {
        let mut books = library();
        books.push(book(5, "Anonymous Work"));

        apply_sort(&mut books, BookSortKey::Authors, true);
        assert_eq!(books[0].id, 5);
    }

    #[test]
    fn status_sort_uses_domain_order_with_title_tiebreak() {
        let mut books = library();
        let mut unknown = book(6, "Aardvark Days");
        unknown.reading_status = None;
        books.push(unknown);
        let mut also_in_progress = book(7, "Children of Dune");
        also_in_progress.reading_status = Some(ReadingStatus::InProgress);
        books.push(also_in_progress);

        apply_sort(&mut books, BookSortKey::ReadingStatus, true);
        let ids: Vec<BookId> = books.iter().map(|b| b.id).collect();
        // InProgress (Children of Dune, Dune by title), NotStarted, Completed, none last
        assert_eq!(ids, vec![7, 2, 3, 1, 6]);

        // Descending reverses the status order but keeps the title
        // tie-break ascending
        apply_sort(&mut books, BookSortKey::ReadingStatus, false);
        let ids: Vec<BookId> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![6, 1, 3, 7, 2]);
    }

    #[test]
    fn absent_ratings_sort_lowest_ascending() {
        let mut books = library();
        apply_sort(&mut books, BookSortKey::Rating, true);
        let ids: Vec<BookId> = books.iter().map(|b| b.id).collect();
        // Hyperion has no rating
        assert_eq!(ids, vec![3, 2, 1]);

        apply_sort(&mut books, BookSortKey::PageCount, true);
        assert_eq!(books[0].id, 3);
    }

    #[test]
    fn filter_and_sort_pipeline_is_idempotent() {
        let source = library();

        let run = || {
            let term = "e".to_lowercase();
            let mut out: Vec<Book> = source
                .iter()
                .filter(|b| passes_filters(b, &term, None, None))
                .cloned()
                .collect();
            apply_sort(&mut out, BookSortKey::PublicationYear, false);
            out
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn same_key_toggles_direction_new_key_resets_to_ascending() {
        use crate::modules::book::domain::repositories::book_repository::MockBookRepository;
        use crate::modules::genre::domain::repositories::genre_repository::MockGenreRepository;
        use crate::modules::wishlist::domain::repositories::wishlist_repository::MockWishlistRepository;

        let mut vm = BookListViewModel::new(
            Arc::new(BookService::new(Arc::new(MockBookRepository::new()))),
            Arc::new(WishlistService::new(Arc::new(MockWishlistRepository::new()))),
            Arc::new(GenreService::new(Arc::new(MockGenreRepository::new()))),
        );
        vm.source = library();

        vm.sort_by(BookSortKey::Rating);
        assert_eq!(vm.sort_state(), (BookSortKey::Rating, true));
        vm.sort_by(BookSortKey::Rating);
        assert_eq!(vm.sort_state(), (BookSortKey::Rating, false));
        vm.sort_by(BookSortKey::Title);
        assert_eq!(vm.sort_state(), (BookSortKey::Title, true));
    }
}
