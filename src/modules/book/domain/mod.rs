pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::book::{Book, BookId};
pub use repositories::book_repository::BookRepository;
pub use value_objects::book_query::BookQuery;
pub use value_objects::reading_status::ReadingStatus;
