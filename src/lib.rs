pub mod modules;
mod schema;
pub mod shared;

// Re-exports of the main surface for embedding applications
pub use modules::author::{Author, AuthorManagerViewModel, AuthorService};
pub use modules::book::{
    Book, BookDetailViewModel, BookListViewModel, BookQuery, BookService, CoverImageStore,
    ReadingStatus,
};
pub use modules::genre::{Genre, GenreManagerViewModel, GenreService};
pub use modules::shell::{ActiveView, NavigationRequest, Shell};
pub use modules::wishlist::{WishlistItem, WishlistManagerViewModel, WishlistService};
pub use shared::errors::{AppError, AppResult};
pub use shared::infrastructure::database::Database;
pub use shared::utils::logger::init_logger;
