pub mod genre_repository;
