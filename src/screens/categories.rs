//! Categories screen coordination.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Category, CategoryDraft, CategoryListOptions, Page};
use crate::query::Query;
use crate::screens::forms::FormErrors;
use crate::traits::CategoryApi;

const DEFAULT_LIMIT: u32 = 10;

/// Cache key for one category list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryListKey {
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl CategoryListKey {
    fn options(&self) -> CategoryListOptions {
        CategoryListOptions {
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            page: Some(self.page),
            limit: Some(self.limit),
            ..Default::default()
        }
    }
}

/// Coordinator for the categories screen.
pub struct CategoriesScreen {
    api: Arc<dyn CategoryApi>,
    query: Query<CategoryListKey, Page<Category>>,
    search: String,
    page: u32,
    limit: u32,
}

impl CategoriesScreen {
    pub fn new(api: Arc<dyn CategoryApi>) -> Self {
        Self {
            api,
            query: Query::new(),
            search: String::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn current_key(&self) -> CategoryListKey {
        CategoryListKey {
            search: self.search.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    pub async fn refresh(&mut self) {
        let key = self.current_key();
        let ticket = self.query.begin(key.clone());
        let result = self.api.list(key.options()).await;
        self.query.settle(ticket, result);
    }

    /// Update the search filter (page resets to 1) and refetch.
    pub async fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
        self.page = 1;
        self.refresh().await;
    }

    pub async fn turn_page(&mut self, page: u32) {
        self.page = page;
        self.refresh().await;
    }

    /// Create a category; validation failures land in `form`.
    pub async fn create(&mut self, draft: CategoryDraft, form: &mut FormErrors) -> Option<Category> {
        match self.api.create(draft).await {
            Ok(category) => {
                form.clear();
                self.query.invalidate();
                self.refresh().await;
                Some(category)
            }
            Err(error) => {
                form.absorb(&error);
                None
            }
        }
    }

    /// Rename/update a category; validation failures land in `form`.
    ///
    /// Books keep their denormalized name snapshots until refetched.
    pub async fn update(
        &mut self,
        id: &str,
        draft: CategoryDraft,
        form: &mut FormErrors,
    ) -> Option<Category> {
        match self.api.update(id, draft).await {
            Ok(category) => {
                form.clear();
                self.query.invalidate();
                self.refresh().await;
                Some(category)
            }
            Err(error) => {
                form.absorb(&error);
                None
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(())
    }

    pub fn page(&self) -> Option<&Page<Category>> {
        self.query.data()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.query.error()
    }
}
