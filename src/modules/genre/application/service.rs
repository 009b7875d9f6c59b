use std::sync::Arc;

use crate::log_info;
use crate::modules::genre::domain::entities::genre::{Genre, GenreId};
use crate::modules::genre::domain::repositories::genre_repository::GenreRepository;
use crate::shared::errors::AppResult;

pub struct GenreService {
    genre_repo: Arc<dyn GenreRepository>,
}

impl GenreService {
    pub fn new(genre_repo: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repo }
    }

    pub async fn get_all_genres(&self) -> AppResult<Vec<Genre>> {
        self.genre_repo.get_all().await
    }

    pub async fn get_genre(&self, id: GenreId) -> AppResult<Option<Genre>> {
        self.genre_repo.find_by_id(id).await
    }

    pub async fn create_genre(&self, genre: &Genre) -> AppResult<GenreId> {
        let id = self.genre_repo.add(genre).await?;
        log_info!("Created genre '{}' (ID {})", genre.name, id);
        Ok(id)
    }

    pub async fn update_genre(&self, genre: &Genre) -> AppResult<()> {
        self.genre_repo.update(genre).await
    }

    /// Deletes a genre. When the delete empties the table, the identity
    /// sequence is restarted so the next genre gets id 1.
    pub async fn delete_genre(&self, id: GenreId) -> AppResult<()> {
        self.genre_repo.delete(id).await?;
        log_info!("Deleted genre {}", id);

        if self.genre_repo.count().await? == 0 {
            self.genre_repo.reset_identity().await?;
            log_info!("Genre table empty, identity sequence restarted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::genre::domain::repositories::genre_repository::MockGenreRepository;

    #[tokio::test]
    async fn delete_that_empties_table_restarts_identity() {
        let mut repo = MockGenreRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(()));
        repo.expect_count().times(1).returning(|| Ok(0));
        repo.expect_reset_identity().times(1).returning(|| Ok(()));

        let service = GenreService::new(Arc::new(repo));
        service.delete_genre(7).await.unwrap();
    }

    #[tokio::test]
    async fn delete_with_rows_remaining_leaves_identity_alone() {
        let mut repo = MockGenreRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(()));
        repo.expect_count().times(1).returning(|| Ok(3));
        repo.expect_reset_identity().times(0);

        let service = GenreService::new(Arc::new(repo));
        service.delete_genre(7).await.unwrap();
    }
}
