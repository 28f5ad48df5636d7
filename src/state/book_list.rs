//! Book list UI state.
//!
//! Filters and pagination for the book list screen, plus the derived
//! display cache of the last fetched page. The one invariant that matters:
//! changing any filter resets the page to 1 inside the same update, so the
//! screen can never show a stale page of a new filter result.

use crate::models::{Book, BookSortField, SortOrder};

/// Filter state for the book list.
#[derive(Debug, Clone, PartialEq)]
pub struct BookFilters {
    pub search: String,
    pub category: String,
    pub sort_by: BookSortField,
    pub sort_order: SortOrder,
}

impl Default for BookFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            sort_by: BookSortField::Title,
            sort_order: SortOrder::Asc,
        }
    }
}

/// Partial filter update; only provided fields override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<BookSortField>,
    pub sort_order: Option<SortOrder>,
}

/// Offset pagination state. `total` comes from the last successful fetch,
/// never computed locally.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
        }
    }
}

/// Partial pagination update; only provided fields override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationPatch {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub total: Option<usize>,
}

/// Context-injected state container for the book list screen.
#[derive(Debug, Default)]
pub struct BookListStore {
    filters: BookFilters,
    pagination: Pagination,
    books: Vec<Book>,
}

impl BookListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &BookFilters {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// The display cache: the items of the last successful fetch.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Replace the display cache.
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    /// Merge a filter patch and reset the page to 1 in the same update.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.filters.search = search;
        }
        if let Some(category) = patch.category {
            self.filters.category = category;
        }
        if let Some(sort_by) = patch.sort_by {
            self.filters.sort_by = sort_by;
        }
        if let Some(sort_order) = patch.sort_order {
            self.filters.sort_order = sort_order;
        }
        self.pagination.page = 1;
    }

    /// Merge a pagination patch. Filters are untouched.
    pub fn set_pagination(&mut self, patch: PaginationPatch) {
        if let Some(page) = patch.page {
            self.pagination.page = page;
        }
        if let Some(limit) = patch.limit {
            self.pagination.limit = limit;
        }
        if let Some(total) = patch.total {
            self.pagination.total = total;
        }
    }

    /// Restore filter defaults and page 1, preserving limit and total.
    pub fn reset_filters(&mut self) {
        self.filters = BookFilters::default();
        self.pagination.page = 1;
    }
}
