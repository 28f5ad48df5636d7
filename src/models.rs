//! Domain records for the catalog admin console.
//!
//! These are the semantic records exchanged between the API surface, the
//! client state stores and the screen coordinators. Drafts and patches are
//! separate types so that "full replace" and "defined-fields-only merge"
//! semantics are explicit rather than duck-typed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized category snapshot embedded in a book record.
///
/// A category rename does not propagate into these snapshots; they refresh
/// only when the book itself is refetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// A catalog book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub publisher: String,
    /// Publication date as an ISO date string.
    pub published_date: String,
    pub categories: Vec<CategoryRef>,
    pub cover_image: String,
    /// Average rating in 0.0..=5.0, absent when the book has no ratings yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable book fields, used for both create and update.
///
/// Update is a full replace of the editable fields; the id and timestamps
/// are managed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub publisher: String,
    pub published_date: String,
    pub categories: Vec<CategoryRef>,
    pub cover_image: String,
    pub rating: Option<f32>,
}

/// A book category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Stored counter; not recomputed when books change.
    pub books_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable category fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

/// User role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Account status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// The opposite status, used by the status toggle.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

/// An admin-console user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial user update; only provided fields override stored ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl UserPatch {
    /// Merge the defined fields of this patch into `user`.
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
    }
}

/// Per-category book count in the dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u32,
}

/// Month bucket of the user-activity series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    pub month: String,
    pub new_users: u32,
    pub recommendations: u32,
}

/// Read-only aggregate snapshot for the dashboard. No mutation path exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_books: u32,
    pub total_users: u32,
    pub total_categories: u32,
    pub total_reviews: u32,
    pub top_categories: Vec<CategoryCount>,
    pub user_activity: Vec<MonthlyActivity>,
}

/// Recommendation algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmType {
    Collaborative,
    Content,
    Hybrid,
}

/// Singleton recommendation configuration. Updates replace the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSettings {
    pub algorithm_type: AlgorithmType,
    /// Minimum similarity for a candidate, in 0.0..=1.0.
    pub similarity_threshold: f32,
    pub max_recommendations: u32,
    pub include_ratings: bool,
    pub include_genres: bool,
    pub include_popularity: bool,
    pub recency_weight: f32,
    pub popularity_weight: f32,
    pub rating_weight: f32,
    /// Refresh cadence in hours.
    pub refresh_interval: u32,
}

/// A file accepted by the upload manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub url: String,
    /// MIME type reported at upload time.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// File part of an upload request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

/// Upload request; the file part is optional so the backend can reject
/// requests that never attached one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadRequest {
    pub file: Option<FilePayload>,
}

impl UploadRequest {
    /// Build a request carrying a file part.
    pub fn with_file(name: &str, content_type: &str, size: u64) -> Self {
        Self {
            file: Some(FilePayload {
                name: name.to_string(),
                content_type: content_type.to_string(),
                size,
            }),
        }
    }
}

/// The subset of a user carried in the authenticated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Partial session-user update; only provided fields override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl SessionUserPatch {
    /// Merge the defined fields of this patch into `user`.
    pub fn apply(&self, user: &mut SessionUser) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}

/// Login request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Successful login result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

/// One page of a list result. `total` is the pre-pagination count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sortable book fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookSortField {
    #[default]
    Title,
    Author,
    Publisher,
    PublishedDate,
}

/// Sortable category fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySortField {
    #[default]
    Name,
    BooksCount,
}

/// Options bag for book list queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookListOptions {
    /// Case-insensitive substring match on title or author.
    pub search: Option<String>,
    /// Category id the book must reference.
    pub category: Option<String>,
    pub sort_by: Option<BookSortField>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Options bag for category list queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryListOptions {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    pub sort_by: Option<CategorySortField>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Options bag for user list queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListOptions {
    /// Case-insensitive substring match on name or email.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Plain pagination options for lists without filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Result of a single-record delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteSummary {
    pub success: bool,
    pub deleted_id: String,
    pub message: String,
}

/// Result of a batch delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchDeleteSummary {
    pub success: bool,
    pub deleted_count: usize,
    pub deleted_ids: Vec<String>,
    pub message: String,
}

/// Result of restoring previously deleted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreSummary {
    pub success: bool,
    pub restored_count: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_patch_only_overrides_defined_fields() {
        let mut user = User {
            id: "user-1".to_string(),
            name: "User 1".to_string(),
            email: "user1@example.com".to_string(),
            role: Role::User,
            status: UserStatus::Active,
            created_at: Utc::now(),
            last_login: None,
            updated_at: None,
        };

        let patch = UserPatch {
            status: Some(UserStatus::Inactive),
            ..Default::default()
        };
        patch.apply(&mut user);

        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.name, "User 1");
        assert_eq!(user.email, "user1@example.com");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_session_user_patch_merges_into_default_user() {
        let mut user = SessionUser::default();
        let patch = SessionUserPatch {
            name: Some("Admin User".to_string()),
            ..Default::default()
        };
        patch.apply(&mut user);

        assert_eq!(user.name, "Admin User");
        assert_eq!(user.email, "");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_status_toggle_round_trips() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_upload_request_with_file() {
        let request = UploadRequest::with_file("cover.jpg", "image/jpeg", 1024);
        let file = request.file.unwrap();
        assert_eq!(file.name, "cover.jpg");
        assert_eq!(file.content_type, "image/jpeg");
        assert_eq!(file.size, 1024);
    }
}
