//! Book resource facade.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    BatchDeleteSummary, Book, BookDraft, BookListOptions, DeleteSummary, Page, RestoreSummary,
};

/// Book catalog operations.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// List books matching the options, offset-paginated.
    async fn list(&self, options: BookListOptions) -> ApiResult<Page<Book>>;

    /// Fetch a single book by id, or fail with `NotFound`.
    async fn get(&self, id: &str) -> ApiResult<Book>;

    /// Create a book; the backend assigns the id and `created_at`.
    async fn create(&self, draft: BookDraft) -> ApiResult<Book>;

    /// Replace the editable fields of a book and stamp `updated_at`.
    async fn update(&self, id: &str, draft: BookDraft) -> ApiResult<Book>;

    /// Delete one book by id.
    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary>;

    /// Delete every book whose id is in `ids`.
    async fn batch_delete(&self, ids: &[String]) -> ApiResult<BatchDeleteSummary>;

    /// Re-insert previously deleted books matching `ids`.
    async fn restore(&self, ids: &[String]) -> ApiResult<RestoreSummary>;
}
