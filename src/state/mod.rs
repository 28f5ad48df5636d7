//! Global client state stores.
//!
//! Two independent stores own their slices of state:
//! - [`AuthStore`] - the authenticated session, persisted across restarts
//! - [`BookListStore`] - book list filters, pagination and display cache
//!
//! Both are explicit context-injected containers; tests construct a fresh
//! instance each, so nothing here is a process-wide global.

pub mod auth;
pub mod book_list;

pub use auth::AuthStore;
pub use book_list::{BookFilters, BookListStore, FilterPatch, Pagination, PaginationPatch};
