use crate::modules::book::domain::entities::book::BookId;

/// Navigation is expressed as values returned from view-model commands and
/// handed to the shell; there is no process-wide messenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    BookList,
    AddBook,
    EditBook(BookId),
    AuthorManager,
    GenreManager,
    WishlistManager,
}
