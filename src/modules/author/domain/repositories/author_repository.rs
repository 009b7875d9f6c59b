use async_trait::async_trait;

use crate::modules::author::domain::entities::author::{Author, AuthorId};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// All authors, ordered by last name then first name.
    async fn get_all(&self) -> AppResult<Vec<Author>>;
    async fn find_by_id(&self, id: AuthorId) -> AppResult<Option<Author>>;
    /// Inserts a row and returns the generated identity.
    async fn add(&self, author: &Author) -> AppResult<AuthorId>;
    async fn update(&self, author: &Author) -> AppResult<()>;
    /// Removing an absent row is not an error.
    async fn delete(&self, id: AuthorId) -> AppResult<()>;
}
