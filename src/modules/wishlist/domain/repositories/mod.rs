pub mod wishlist_repository;
