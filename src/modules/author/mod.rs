pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod viewmodel;

// Re-exports for easy external access
pub use application::service::AuthorService;
pub use domain::{Author, AuthorId, AuthorRepository};
pub use infrastructure::repository::AuthorRepositoryImpl;
pub use viewmodel::AuthorManagerViewModel;
