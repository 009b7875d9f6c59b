use async_trait::async_trait;

use crate::modules::genre::domain::entities::genre::{Genre, GenreId};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// All genres, ordered by name.
    async fn get_all(&self) -> AppResult<Vec<Genre>>;
    async fn find_by_id(&self, id: GenreId) -> AppResult<Option<Genre>>;
    /// Inserts a row and returns the generated identity.
    async fn add(&self, genre: &Genre) -> AppResult<GenreId>;
    async fn update(&self, genre: &Genre) -> AppResult<()>;
    /// Removing an absent row is not an error.
    async fn delete(&self, id: GenreId) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
    /// Restart the identity sequence so the next insert gets id 1.
    async fn reset_identity(&self) -> AppResult<()>;
}
