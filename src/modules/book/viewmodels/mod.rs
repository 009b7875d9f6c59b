pub mod book_detail;
pub mod book_list;

pub use book_detail::BookDetailViewModel;
pub use book_list::{BookListViewModel, BookSortKey};
