pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod viewmodels;

// Re-exports for easy external access
pub use application::ports::CoverImageStore;
pub use application::service::BookService;
pub use domain::{Book, BookId, BookQuery, BookRepository, ReadingStatus};
pub use infrastructure::repository::BookRepositoryImpl;
pub use viewmodels::{BookDetailViewModel, BookListViewModel, BookSortKey};
