pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod viewmodel;

// Re-exports for easy external access
pub use application::service::GenreService;
pub use domain::{Genre, GenreId, GenreRepository};
pub use infrastructure::repository::GenreRepositoryImpl;
pub use viewmodel::GenreManagerViewModel;
