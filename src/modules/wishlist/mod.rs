pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod viewmodel;

// Re-exports for easy external access
pub use application::service::WishlistService;
pub use domain::{NewWishlistItem, WishlistItem, WishlistItemId, WishlistRepository};
pub use infrastructure::repository::WishlistRepositoryImpl;
pub use viewmodel::WishlistManagerViewModel;
