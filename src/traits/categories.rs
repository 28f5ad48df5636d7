//! Category resource facade.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Category, CategoryDraft, CategoryListOptions, DeleteSummary, Page};

/// Category operations.
#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn list(&self, options: CategoryListOptions) -> ApiResult<Page<Category>>;

    /// Fetch a single category by id, or fail with `NotFound`.
    async fn get(&self, id: &str) -> ApiResult<Category>;

    async fn create(&self, draft: CategoryDraft) -> ApiResult<Category>;

    async fn update(&self, id: &str, draft: CategoryDraft) -> ApiResult<Category>;

    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary>;
}
