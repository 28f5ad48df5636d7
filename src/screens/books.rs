//! Book list screen coordination.
//!
//! Derives the cache key from the book list store, fetches through the
//! book facade, and writes results back: `total` into pagination, the item
//! list into the display cache. Mutations invalidate and refetch; a batch
//! delete that wipes the whole current page additionally resets pagination
//! to page 1 and fetches again, so the user lands on data instead of an
//! empty page.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{
    BatchDeleteSummary, Book, BookDraft, BookListOptions, BookSortField, Category,
    CategoryListOptions, Page, RestoreSummary, SortOrder,
};
use crate::query::Query;
use crate::screens::forms::FormErrors;
use crate::state::{BookListStore, FilterPatch, PaginationPatch};
use crate::traits::{BookApi, CategoryApi};

/// How many categories to pull for the filter dropdown.
const CATEGORY_OPTIONS_LIMIT: u32 = 100;

/// Cache key for one book list fetch: the full filter + pagination tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookListKey {
    pub search: String,
    pub category: String,
    pub sort_by: BookSortField,
    pub sort_order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl BookListKey {
    fn options(&self) -> BookListOptions {
        BookListOptions {
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            category: (!self.category.is_empty()).then(|| self.category.clone()),
            sort_by: Some(self.sort_by),
            sort_order: Some(self.sort_order),
            page: Some(self.page),
            limit: Some(self.limit),
        }
    }
}

/// Coordinator for the book list screen.
pub struct BooksScreen {
    api: Arc<dyn BookApi>,
    category_api: Arc<dyn CategoryApi>,
    store: BookListStore,
    query: Query<BookListKey, Page<Book>>,
    options: Query<(), Page<Category>>,
}

impl BooksScreen {
    pub fn new(api: Arc<dyn BookApi>, category_api: Arc<dyn CategoryApi>) -> Self {
        Self {
            api,
            category_api,
            store: BookListStore::new(),
            query: Query::new(),
            options: Query::new(),
        }
    }

    /// The key the next fetch will use, derived from the store.
    pub fn current_key(&self) -> BookListKey {
        let filters = self.store.filters();
        let pagination = self.store.pagination();
        BookListKey {
            search: filters.search.clone(),
            category: filters.category.clone(),
            sort_by: filters.sort_by,
            sort_order: filters.sort_order,
            page: pagination.page,
            limit: pagination.limit,
        }
    }

    /// Fetch the page for the current filters and pagination.
    pub async fn refresh(&mut self) {
        let key = self.current_key();
        tracing::debug!(page = key.page, "fetching book list");
        let ticket = self.query.begin(key.clone());
        match self.api.list(key.options()).await {
            Ok(page) => {
                self.store.set_pagination(PaginationPatch {
                    total: Some(page.total),
                    ..Default::default()
                });
                self.store.set_books(page.items.clone());
                self.query.settle(ticket, Ok(page));
            }
            Err(error) => {
                self.query.settle(ticket, Err(error));
            }
        }
    }

    /// Fetch the book list and the category dropdown options concurrently.
    pub async fn refresh_with_options(&mut self) {
        let key = self.current_key();
        let list_ticket = self.query.begin(key.clone());
        let options_ticket = self.options.begin(());

        let (list_result, options_result) = tokio::join!(
            self.api.list(key.options()),
            self.category_api.list(CategoryListOptions {
                limit: Some(CATEGORY_OPTIONS_LIMIT),
                ..Default::default()
            })
        );

        if let Ok(page) = &list_result {
            self.store.set_pagination(PaginationPatch {
                total: Some(page.total),
                ..Default::default()
            });
            self.store.set_books(page.items.clone());
        }
        self.query.settle(list_ticket, list_result);
        self.options.settle(options_ticket, options_result);
    }

    /// Update the search filter (page resets to 1) and refetch.
    pub async fn set_search(&mut self, search: &str) {
        self.store.set_filters(FilterPatch {
            search: Some(search.to_string()),
            ..Default::default()
        });
        self.refresh().await;
    }

    /// Update the category filter (page resets to 1) and refetch.
    pub async fn set_category_filter(&mut self, category: &str) {
        self.store.set_filters(FilterPatch {
            category: Some(category.to_string()),
            ..Default::default()
        });
        self.refresh().await;
    }

    /// Update the sort (page resets to 1) and refetch.
    pub async fn set_sort(&mut self, sort_by: BookSortField, sort_order: SortOrder) {
        self.store.set_filters(FilterPatch {
            sort_by: Some(sort_by),
            sort_order: Some(sort_order),
            ..Default::default()
        });
        self.refresh().await;
    }

    /// Restore default filters and refetch.
    pub async fn reset_filters(&mut self) {
        self.store.reset_filters();
        self.refresh().await;
    }

    /// Turn to a page and refetch.
    pub async fn turn_page(&mut self, page: u32) {
        self.store.set_pagination(PaginationPatch {
            page: Some(page),
            ..Default::default()
        });
        self.refresh().await;
    }

    /// Change the page size, landing back on page 1.
    pub async fn set_page_size(&mut self, limit: u32) {
        self.store.set_pagination(PaginationPatch {
            page: Some(1),
            limit: Some(limit),
            ..Default::default()
        });
        self.refresh().await;
    }

    /// Create a book. Validation failures land in `form`; success clears
    /// the form and refetches the list.
    pub async fn create(&mut self, draft: BookDraft, form: &mut FormErrors) -> Option<Book> {
        match self.api.create(draft).await {
            Ok(book) => {
                form.clear();
                self.query.invalidate();
                self.refresh().await;
                Some(book)
            }
            Err(error) => {
                form.absorb(&error);
                None
            }
        }
    }

    /// Replace a book's editable fields. Same error projection as create.
    pub async fn update(&mut self, id: &str, draft: BookDraft, form: &mut FormErrors) -> Option<Book> {
        match self.api.update(id, draft).await {
            Ok(book) => {
                form.clear();
                self.query.invalidate();
                self.refresh().await;
                Some(book)
            }
            Err(error) => {
                form.absorb(&error);
                None
            }
        }
    }

    /// Delete one book and refetch.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(())
    }

    /// Batch-delete books, refetch, and correct a page underflow.
    ///
    /// When the delete removed exactly the rows that were on screen, the
    /// current page is now empty; reset to page 1 and fetch once more.
    pub async fn batch_delete(&mut self, ids: &[String]) -> Result<BatchDeleteSummary, ApiError> {
        let visible = self.store.books().len();
        let summary = self.api.batch_delete(ids).await?;

        self.query.invalidate();
        self.refresh().await;

        if visible > 0 && summary.deleted_count == visible {
            tracing::debug!("current page emptied by batch delete; resetting to page 1");
            self.store.set_pagination(PaginationPatch {
                page: Some(1),
                ..Default::default()
            });
            self.refresh().await;
        }
        Ok(summary)
    }

    /// Restore previously deleted books and refetch.
    pub async fn restore(&mut self, ids: &[String]) -> Result<RestoreSummary, ApiError> {
        let summary = self.api.restore(ids).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(summary)
    }

    /// The displayable page, with keep-previous semantics during refetch.
    pub fn page(&self) -> Option<&Page<Book>> {
        self.query.data()
    }

    /// Category options for the filter dropdown.
    pub fn category_options(&self) -> Option<&Page<Category>> {
        self.options.data()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.query.error()
    }

    /// Read access to the underlying UI state store.
    pub fn state(&self) -> &BookListStore {
        &self.store
    }
}
