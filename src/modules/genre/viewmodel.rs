use std::sync::Arc;

use crate::modules::genre::application::service::GenreService;
use crate::modules::genre::domain::entities::genre::{Genre, GenreId};
use crate::shared::application::observable::{ChangeNotifier, Subscription};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreSortKey {
    Id,
    Name,
}

/// State holder behind the genre management screen.
pub struct GenreManagerViewModel {
    genre_service: Arc<GenreService>,

    genres: Vec<Genre>,
    /// Working copy of the selected genre, edited in place until saved.
    selected: Option<Genre>,
    new_genre_name: String,
    is_loading: bool,
    changes: ChangeNotifier,
}

impl GenreManagerViewModel {
    pub fn new(genre_service: Arc<GenreService>) -> Self {
        Self {
            genre_service,
            genres: Vec::new(),
            selected: None,
            new_genre_name: String::new(),
            is_loading: false,
            changes: ChangeNotifier::new(),
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + 'static,
    {
        self.changes.subscribe(callback)
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn selected(&self) -> Option<&Genre> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn select(&mut self, id: Option<GenreId>) {
        self.selected = id.and_then(|id| self.genres.iter().find(|g| g.id == id).cloned());
        self.changes.notify("selected");
    }

    pub fn set_new_genre_name(&mut self, value: impl Into<String>) {
        self.new_genre_name = value.into();
    }

    pub fn set_selected_name(&mut self, value: impl Into<String>) {
        if let Some(genre) = self.selected.as_mut() {
            genre.name = value.into();
            self.changes.notify("selected");
        }
    }

    pub fn set_selected_description(&mut self, value: Option<String>) {
        if let Some(genre) = self.selected.as_mut() {
            genre.description = value;
            self.changes.notify("selected");
        }
    }

    pub fn can_add(&self) -> bool {
        !self.new_genre_name.trim().is_empty()
    }

    pub fn can_save(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|g| !g.name.trim().is_empty())
    }

    pub fn can_delete(&self) -> bool {
        self.selected.is_some()
    }

    pub async fn load_genres(&mut self) -> AppResult<()> {
        self.set_loading(true);
        let result = self.genre_service.get_all_genres().await;
        self.set_loading(false);

        self.genres = result?;
        self.changes.notify("genres");
        Ok(())
    }

    pub async fn add_genre(&mut self) -> AppResult<()> {
        Validator::validate_genre_name(&self.new_genre_name)?;
        let genre = Genre::new(self.new_genre_name.trim());

        self.set_loading(true);
        let result = self.genre_service.create_genre(&genre).await;
        self.set_loading(false);
        result?;

        self.new_genre_name.clear();
        self.changes.notify("new_genre_name");
        self.load_genres().await
    }

    pub async fn save_selected(&mut self) -> AppResult<()> {
        let genre = self
            .selected
            .clone()
            .ok_or_else(|| AppError::InvalidInput("No genre selected".to_string()))?;
        Validator::validate_genre_name(&genre.name)?;

        self.set_loading(true);
        let result = self.genre_service.update_genre(&genre).await;
        self.set_loading(false);
        result?;

        self.load_genres().await
    }

    pub async fn delete_selected(&mut self) -> AppResult<()> {
        let id = self
            .selected
            .as_ref()
            .map(|g| g.id)
            .ok_or_else(|| AppError::InvalidInput("No genre selected".to_string()))?;

        self.set_loading(true);
        let result = self.genre_service.delete_genre(id).await;
        self.set_loading(false);
        result?;

        self.selected = None;
        self.changes.notify("selected");
        self.load_genres().await
    }

    /// Reorder the loaded list; always ascending, matching the two header
    /// buttons on the management screen.
    pub fn sort_by(&mut self, key: GenreSortKey) {
        match key {
            GenreSortKey::Id => self.genres.sort_by_key(|g| g.id),
            GenreSortKey::Name => self
                .genres
                .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        }
        self.changes.notify("genres");
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.changes.notify("is_loading");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::genre::domain::repositories::genre_repository::MockGenreRepository;

    fn genre(id: GenreId, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn add_genre_rejects_blank_name() {
        let mut repo = MockGenreRepository::new();
        repo.expect_add().times(0);

        let mut vm = GenreManagerViewModel::new(Arc::new(GenreService::new(Arc::new(repo))));
        vm.set_new_genre_name("   ");
        assert!(matches!(
            vm.add_genre().await.unwrap_err(),
            AppError::ValidationError(_)
        ));
    }

    #[test]
    fn sort_by_name_is_case_insensitive() {
        let repo = MockGenreRepository::new();
        let mut vm = GenreManagerViewModel::new(Arc::new(GenreService::new(Arc::new(repo))));
        vm.genres = vec![genre(1, "science fiction"), genre(2, "Biography"), genre(3, "essays")];

        vm.sort_by(GenreSortKey::Name);
        let names: Vec<&str> = vm.genres().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Biography", "essays", "science fiction"]);

        vm.sort_by(GenreSortKey::Id);
        let ids: Vec<GenreId> = vm.genres().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
