use std::sync::Arc;

use crate::log_info;
use crate::modules::author::domain::entities::author::{Author, AuthorId};
use crate::modules::author::domain::repositories::author_repository::AuthorRepository;
use crate::shared::errors::AppResult;

pub struct AuthorService {
    author_repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self { author_repo }
    }

    pub async fn get_all_authors(&self) -> AppResult<Vec<Author>> {
        self.author_repo.get_all().await
    }

    pub async fn get_author(&self, id: AuthorId) -> AppResult<Option<Author>> {
        self.author_repo.find_by_id(id).await
    }

    pub async fn create_author(&self, author: &Author) -> AppResult<AuthorId> {
        let id = self.author_repo.add(author).await?;
        log_info!("Created author '{}' (ID {})", author.full_name(), id);
        Ok(id)
    }

    pub async fn update_author(&self, author: &Author) -> AppResult<()> {
        self.author_repo.update(author).await
    }

    pub async fn delete_author(&self, id: AuthorId) -> AppResult<()> {
        self.author_repo.delete(id).await?;
        log_info!("Deleted author {}", id);
        Ok(())
    }
}
