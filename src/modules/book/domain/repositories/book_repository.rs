use async_trait::async_trait;

use crate::modules::book::domain::entities::book::{Book, BookId};
use crate::modules::book::domain::value_objects::book_query::BookQuery;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books ordered by title, with author and genre sets populated.
    /// Books without join rows appear with empty sets.
    async fn get_all_with_details(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id_with_details(&self, id: BookId) -> AppResult<Option<Book>>;
    /// Exact-match lookup used by the duplicate-ISBN check. Association
    /// sets are not populated.
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;
    /// Inserts the book row plus one join row per associated author and
    /// genre, atomically. Returns the generated identity.
    async fn add(&self, book: &Book) -> AppResult<BookId>;
    /// Updates the book row and replaces all join rows with the current
    /// association sets, atomically.
    async fn update(&self, book: &Book) -> AppResult<()>;
    /// Removing an absent row is not an error; join rows cascade.
    async fn delete(&self, id: BookId) -> AppResult<()>;
    /// AND-composed filtering per `BookQuery`, ordered by title, with
    /// association sets populated.
    async fn search(&self, query: &BookQuery) -> AppResult<Vec<Book>>;
}
