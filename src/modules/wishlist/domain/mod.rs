pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::wishlist_item::{NewWishlistItem, WishlistItem, WishlistItemId};
pub use repositories::wishlist_repository::WishlistRepository;
