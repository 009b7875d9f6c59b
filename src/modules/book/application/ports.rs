use async_trait::async_trait;

use crate::modules::book::domain::entities::book::BookId;
use crate::shared::errors::AppResult;

/// Capability consumed by the book detail screen for cover images. The
/// core depends only on these signatures; storage layout, caching and
/// HTTP handling live with the implementor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoverImageStore: Send + Sync {
    /// Copy the image at `source_path` into managed storage and return the
    /// stored relative path.
    async fn save_cover(&self, source_path: &str, book_id: BookId) -> AppResult<String>;
    /// Returns whether anything was removed.
    async fn delete_cover(&self, relative_path: &str) -> AppResult<bool>;
    /// Cheap shape check before any copy happens.
    fn validate(&self, path: &str) -> bool;
    /// Fetch a remote image to a temporary file and return its path.
    async fn download(&self, url: &str) -> AppResult<String>;
}
