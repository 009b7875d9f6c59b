use std::sync::Arc;

use crate::modules::author::application::service::AuthorService;
use crate::modules::author::domain::entities::author::{Author, AuthorId};
use crate::shared::application::observable::{ChangeNotifier, Subscription};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// State holder behind the author management screen.
///
/// Commands return `AppResult`; the presentation layer is responsible for
/// turning failures into user-visible messages.
pub struct AuthorManagerViewModel {
    author_service: Arc<AuthorService>,

    authors: Vec<Author>,
    /// Working copy of the selected author, edited in place until saved.
    selected: Option<Author>,
    new_first_name: String,
    new_last_name: String,
    new_biography: String,
    is_loading: bool,
    changes: ChangeNotifier,
}

impl AuthorManagerViewModel {
    pub fn new(author_service: Arc<AuthorService>) -> Self {
        Self {
            author_service,
            authors: Vec::new(),
            selected: None,
            new_first_name: String::new(),
            new_last_name: String::new(),
            new_biography: String::new(),
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

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn selected(&self) -> Option<&Author> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn select(&mut self, id: Option<AuthorId>) {
        self.selected = id.and_then(|id| self.authors.iter().find(|a| a.id == id).cloned());
        self.changes.notify("selected");
    }

    pub fn set_new_first_name(&mut self, value: impl Into<String>) {
        self.new_first_name = value.into();
    }

    pub fn set_new_last_name(&mut self, value: impl Into<String>) {
        self.new_last_name = value.into();
    }

    pub fn set_new_biography(&mut self, value: impl Into<String>) {
        self.new_biography = value.into();
    }

    pub fn set_selected_first_name(&mut self, value: impl Into<String>) {
        if let Some(author) = self.selected.as_mut() {
            author.first_name = value.into();
            self.changes.notify("selected");
        }
    }

    pub fn set_selected_last_name(&mut self, value: impl Into<String>) {
        if let Some(author) = self.selected.as_mut() {
            author.last_name = value.into();
            self.changes.notify("selected");
        }
    }

    pub fn set_selected_biography(&mut self, value: Option<String>) {
        if let Some(author) = self.selected.as_mut() {
            author.biography = value;
            self.changes.notify("selected");
        }
    }

    pub fn can_add(&self) -> bool {
        !self.new_first_name.trim().is_empty() && !self.new_last_name.trim().is_empty()
    }

    pub fn can_save_or_delete(&self) -> bool {
        self.selected.is_some()
    }

    pub async fn load_authors(&mut self) -> AppResult<()> {
        self.set_loading(true);
        let result = self.author_service.get_all_authors().await;
        self.set_loading(false);

        self.authors = result?;
        self.changes.notify("authors");
        Ok(())
    }

    pub async fn add_author(&mut self) -> AppResult<()> {
        Validator::validate_person_name(&self.new_first_name, "First name")?;
        Validator::validate_person_name(&self.new_last_name, "Last name")?;

        let mut author = Author::new(self.new_first_name.trim(), self.new_last_name.trim());
        let biography = self.new_biography.trim();
        if !biography.is_empty() {
            author = author.with_biography(biography);
        }

        self.set_loading(true);
        let result = self.author_service.create_author(&author).await;
        self.set_loading(false);
        result?;

        self.new_first_name.clear();
        self.new_last_name.clear();
        self.new_biography.clear();
        self.changes.notify("new_author_form");

        self.load_authors().await
    }

    pub async fn save_selected(&mut self) -> AppResult<()> {
        let author = self
            .selected
            .clone()
            .ok_or_else(|| AppError::InvalidInput("No author selected".to_string()))?;
        Validator::validate_person_name(&author.first_name, "First name")?;
        Validator::validate_person_name(&author.last_name, "Last name")?;

        self.set_loading(true);
        let result = self.author_service.update_author(&author).await;
        self.set_loading(false);
        result?;

        self.load_authors().await
    }

    pub async fn delete_selected(&mut self) -> AppResult<()> {
        let id = self
            .selected
            .as_ref()
            .map(|a| a.id)
            .ok_or_else(|| AppError::InvalidInput("No author selected".to_string()))?;

        self.set_loading(true);
        let result = self.author_service.delete_author(id).await;
        self.set_loading(false);
        result?;

        self.selected = None;
        self.changes.notify("selected");
        self.load_authors().await
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.changes.notify("is_loading");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::author::domain::repositories::author_repository::MockAuthorRepository;

    fn vm_with(repo: MockAuthorRepository) -> AuthorManagerViewModel {
        AuthorManagerViewModel::new(Arc::new(AuthorService::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn add_author_rejects_blank_names_before_any_repository_call() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_add().times(0);

        let mut vm = vm_with(repo);
        vm.set_new_first_name("  ");
        vm.set_new_last_name("Austen");

        let err = vm.add_author().await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn add_author_creates_and_reloads() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_add()
            .withf(|a| a.first_name == "Jane" && a.last_name == "Austen")
            .times(1)
            .returning(|_| Ok(1));
        repo.expect_get_all().times(1).returning(|| {
            Ok(vec![Author {
                id: 1,
                first_name: "Jane".to_string(),
                last_name: "Austen".to_string(),
                biography: None,
            }])
        });

        let mut vm = vm_with(repo);
        vm.set_new_first_name("Jane");
        vm.set_new_last_name("Austen");
        vm.add_author().await.unwrap();

        assert_eq!(vm.authors().len(), 1);
        assert!(vm.new_first_name.is_empty());
    }

    #[tokio::test]
    async fn delete_requires_selection() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_delete().times(0);

        let mut vm = vm_with(repo);
        assert!(vm.delete_selected().await.is_err());
    }
}
