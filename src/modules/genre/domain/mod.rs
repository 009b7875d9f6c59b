pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::genre::{Genre, GenreId};
pub use repositories::genre_repository::GenreRepository;
