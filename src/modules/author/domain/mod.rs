pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::author::{Author, AuthorId};
pub use repositories::author_repository::AuthorRepository;
