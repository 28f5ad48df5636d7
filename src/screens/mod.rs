//! Per-screen coordination.
//!
//! Each screen owns its queries (and, for the book list, its state store)
//! plus `Arc` handles on the facade traits it drives. The pattern is the
//! same everywhere: derive a cache key from the current UI state, fetch
//! through the facade, expose `{data, loading, error}`, and after a
//! successful mutation invalidate and refetch so reads reflect the write.

pub mod books;
pub mod categories;
pub mod dashboard;
pub mod files;
pub mod forms;
pub mod settings;
pub mod users;

pub use books::{BookListKey, BooksScreen};
pub use categories::{CategoriesScreen, CategoryListKey};
pub use dashboard::DashboardScreen;
pub use files::{FileListKey, FilesScreen};
pub use forms::FormErrors;
pub use settings::SettingsScreen;
pub use users::{UserListKey, UsersScreen};
