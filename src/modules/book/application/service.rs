use std::sync::Arc;

use crate::log_info;
use crate::modules::book::domain::entities::book::{Book, BookId};
use crate::modules::book::domain::repositories::book_repository::BookRepository;
use crate::modules::book::domain::value_objects::book_query::BookQuery;
use crate::shared::errors::{AppError, AppResult};

pub struct BookService {
    book_repo: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(book_repo: Arc<dyn BookRepository>) -> Self {
        Self { book_repo }
    }

    pub async fn get_all_books_with_details(&self) -> AppResult<Vec<Book>> {
        self.book_repo.get_all_with_details().await
    }

    pub async fn get_book_details(&self, id: BookId) -> AppResult<Option<Book>> {
        self.book_repo.find_by_id_with_details(id).await
    }

    pub async fn search_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.book_repo.search(query).await
    }

    /// Adds a book. When the book carries a non-empty ISBN, a book already
    /// stored under the same ISBN makes this fail with `Conflict` before
    /// anything is inserted.
    pub async fn add_book(&self, book: &Book) -> AppResult<BookId> {
        if let Some(isbn) = book.isbn.as_deref().filter(|s| !s.is_empty()) {
            if let Some(existing) = self.book_repo.find_by_isbn(isbn).await? {
                return Err(AppError::Conflict(format!(
                    "A book with ISBN '{}' already exists: '{}'",
                    isbn, existing.title
                )));
            }
        }

        let id = self.book_repo.add(book).await?;
        log_info!("Added book '{}' (ID {})", book.title, id);
        Ok(id)
    }

    pub async fn update_book(&self, book: &Book) -> AppResult<()> {
        self.book_repo.update(book).await
    }

    pub async fn delete_book(&self, id: BookId) -> AppResult<()> {
        self.book_repo.delete(id).await?;
        log_info!("Deleted book {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::book::domain::repositories::book_repository::MockBookRepository;

    fn book_with_isbn(title: &str, isbn: Option<&str>) -> Book {
        let mut book = Book::new(title);
        book.isbn = isbn.map(str::to_string);
        book
    }

    #[tokio::test]
    async fn duplicate_isbn_conflicts_without_inserting() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_isbn()
            .withf(|isbn| isbn == "111")
            .times(1)
            .returning(|_| Ok(Some(book_with_isbn("Dup", Some("111")))));
        repo.expect_add().times(0);

        let service = BookService::new(Arc::new(repo));
        let err = service
            .add_book(&book_with_isbn("Dup2", Some("111")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn unique_isbn_inserts() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_isbn().times(1).returning(|_| Ok(None));
        repo.expect_add().times(1).returning(|_| Ok(1));

        let service = BookService::new(Arc::new(repo));
        let id = service
            .add_book(&book_with_isbn("Emma", Some("222")))
            .await
            .unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn missing_or_empty_isbn_skips_the_uniqueness_check() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_isbn().times(0);
        repo.expect_add().times(2).returning(|_| Ok(1));

        let service = BookService::new(Arc::new(repo));
        service
            .add_book(&book_with_isbn("No isbn", None))
            .await
            .unwrap();
        service
            .add_book(&book_with_isbn("Empty isbn", Some("")))
            .await
            .unwrap();
    }
}
