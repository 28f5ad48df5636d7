//! File-upload facade.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{DeleteSummary, Page, PageOptions, UploadRequest, UploadedFile};

/// Mock file-upload manager operations.
#[async_trait]
pub trait UploadApi: Send + Sync {
    /// Accept an upload, or fail with `BadRequest` when no file part is
    /// attached. A rejected upload never appends to the file collection.
    async fn upload(&self, request: UploadRequest) -> ApiResult<UploadedFile>;

    async fn list(&self, options: PageOptions) -> ApiResult<Page<UploadedFile>>;

    /// Delete an uploaded file by id, or fail with `NotFound`.
    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary>;
}
