//! File manager screen coordination.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Page, PageOptions, UploadRequest, UploadedFile};
use crate::query::Query;
use crate::traits::UploadApi;

const DEFAULT_LIMIT: u32 = 10;

/// Cache key for one uploaded-file list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileListKey {
    pub page: u32,
    pub limit: u32,
}

/// Coordinator for the mock file-upload manager.
pub struct FilesScreen {
    api: Arc<dyn UploadApi>,
    query: Query<FileListKey, Page<UploadedFile>>,
    page: u32,
    limit: u32,
}

impl FilesScreen {
    pub fn new(api: Arc<dyn UploadApi>) -> Self {
        Self {
            api,
            query: Query::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn current_key(&self) -> FileListKey {
        FileListKey {
            page: self.page,
            limit: self.limit,
        }
    }

    pub async fn refresh(&mut self) {
        let key = self.current_key();
        let ticket = self.query.begin(key.clone());
        let result = self
            .api
            .list(PageOptions {
                page: Some(key.page),
                limit: Some(key.limit),
            })
            .await;
        self.query.settle(ticket, result);
    }

    pub async fn turn_page(&mut self, page: u32) {
        self.page = page;
        self.refresh().await;
    }

    /// Upload a file and refetch on success.
    ///
    /// A request without a file part fails `BadRequest` and leaves the
    /// collection untouched; callers surface the message as a banner.
    pub async fn upload(&mut self, request: UploadRequest) -> Result<UploadedFile, ApiError> {
        let file = self.api.upload(request).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(file)
    }

    /// Delete an uploaded file by id and refetch.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(())
    }

    pub fn page(&self) -> Option<&Page<UploadedFile>> {
        self.query.data()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.query.error()
    }
}
