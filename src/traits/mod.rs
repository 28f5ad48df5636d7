//! Per-resource API facade traits.
//!
//! Each resource the console manages exposes one trait; the screens only
//! ever see these traits, never a concrete client. Today the sole
//! implementation is the in-memory mock adapter, but the seam is where a
//! real network client would be substituted without touching call sites.
//!
//! # Traits
//!
//! - [`AuthApi`] - session login
//! - [`BookApi`] - book CRUD, batch delete, restore
//! - [`CategoryApi`] - category CRUD
//! - [`UserApi`] - user management, role changes, batch hooks
//! - [`DashboardApi`] - aggregate statistics snapshot
//! - [`RecommendationApi`] - recommendation settings singleton
//! - [`UploadApi`] - mock file-upload manager

pub mod auth;
pub mod books;
pub mod categories;
pub mod dashboard;
pub mod recommendations;
pub mod uploads;
pub mod users;

pub use auth::AuthApi;
pub use books::BookApi;
pub use categories::CategoryApi;
pub use dashboard::DashboardApi;
pub use recommendations::RecommendationApi;
pub use uploads::UploadApi;
pub use users::UserApi;
