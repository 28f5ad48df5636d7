//! Mock API client.
//!
//! Stand-in for a remote service. Every operation awaits its simulated
//! latency, then locks the data store to read or mutate it, and returns a
//! plain result or a structured [`ApiError`]. The lock is never held across
//! an await point.
//!
//! Unlike a classic read-only demo backend, mutations persist: create
//! inserts, update merges in place, delete moves records to a trash list
//! that restore drains. Subsequent list calls always reflect mutations.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::store::MockDataStore;
use crate::error::{ApiError, ApiResult, FieldErrors};
use crate::models::{
    BatchDeleteSummary, Book, BookDraft, BookListOptions, BookSortField, Category, CategoryDraft,
    CategoryListOptions, CategorySortField, Credentials, DashboardStats, DeleteSummary, Page,
    PageOptions, RecommendationSettings, RestoreSummary, Role, Session, SessionUser, SortOrder,
    UploadRequest, UploadedFile, User, UserListOptions, UserPatch,
};
use crate::traits::{
    AuthApi, BookApi, CategoryApi, DashboardApi, RecommendationApi, UploadApi, UserApi,
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "password";

// Simulated latency per operation, in milliseconds. The exact values only
// matter as a non-zero async boundary.
const LOGIN_DELAY_MS: u64 = 800;
const BOOK_LIST_DELAY_MS: u64 = 600;
const BOOK_GET_DELAY_MS: u64 = 400;
const BOOK_WRITE_DELAY_MS: u64 = 800;
const BOOK_DELETE_DELAY_MS: u64 = 600;
const CATEGORY_LIST_DELAY_MS: u64 = 400;
const CATEGORY_GET_DELAY_MS: u64 = 300;
const CATEGORY_WRITE_DELAY_MS: u64 = 600;
const CATEGORY_DELETE_DELAY_MS: u64 = 500;
const USER_LIST_DELAY_MS: u64 = 500;
const USER_GET_DELAY_MS: u64 = 300;
const USER_WRITE_DELAY_MS: u64 = 600;
const USER_DELETE_DELAY_MS: u64 = 500;
const STATS_DELAY_MS: u64 = 700;
const SETTINGS_GET_DELAY_MS: u64 = 400;
const SETTINGS_WRITE_DELAY_MS: u64 = 600;
const UPLOAD_DELAY_MS: u64 = 1000;
const FILE_LIST_DELAY_MS: u64 = 600;
const FILE_DELETE_DELAY_MS: u64 = 700;

/// Fake backend implementing every facade trait over [`MockDataStore`].
#[derive(Debug, Clone)]
pub struct MockApiClient {
    store: Arc<Mutex<MockDataStore>>,
    latency: bool,
}

impl MockApiClient {
    /// Wrap an existing store, with realistic latency enabled.
    pub fn new(store: Arc<Mutex<MockDataStore>>) -> Self {
        Self {
            store,
            latency: true,
        }
    }

    /// A client over a freshly seeded store.
    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(Mutex::new(MockDataStore::with_seed_data())))
    }

    /// Disable the simulated latency; used by tests and the demo driver.
    pub fn without_latency(mut self) -> Self {
        self.latency = false;
        self
    }

    /// Handle on the shared store, e.g. for seeding test fixtures.
    pub fn store(&self) -> Arc<Mutex<MockDataStore>> {
        Arc::clone(&self.store)
    }

    async fn simulate(&self, ms: u64) {
        if self.latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait]
impl AuthApi for MockApiClient {
    async fn login(&self, credentials: Credentials) -> ApiResult<Session> {
        self.simulate(LOGIN_DELAY_MS).await;
        if credentials.email == ADMIN_EMAIL && credentials.password == ADMIN_PASSWORD {
            tracing::info!(email = %credentials.email, "login accepted");
            return Ok(Session {
                user: SessionUser {
                    id: "user-1".to_string(),
                    name: "Admin User".to_string(),
                    email: ADMIN_EMAIL.to_string(),
                    role: Role::Admin,
                },
                token: format!("mock-token-{}", Uuid::new_v4()),
            });
        }
        tracing::info!(email = %credentials.email, "login rejected");
        Err(ApiError::Unauthorized {
            message: "Invalid email or password".to_string(),
        })
    }
}

#[async_trait]
impl BookApi for MockApiClient {
    async fn list(&self, options: BookListOptions) -> ApiResult<Page<Book>> {
        self.simulate(BOOK_LIST_DELAY_MS).await;
        let mut books: Vec<Book> = self.store.lock().unwrap().books.clone();

        if let Some(search) = options.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            books.retain(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            });
        }
        if let Some(category) = options.category.as_deref().filter(|c| !c.is_empty()) {
            books.retain(|book| book.categories.iter().any(|c| c.id == category));
        }
        if let Some(field) = options.sort_by {
            let order = options.sort_order.unwrap_or_default();
            books.sort_by(|a, b| {
                ordered(
                    book_sort_key(a, field).to_lowercase(),
                    book_sort_key(b, field).to_lowercase(),
                    order,
                )
            });
        }

        Ok(paginate(books, options.page, options.limit))
    }

    async fn get(&self, id: &str) -> ApiResult<Book> {
        self.simulate(BOOK_GET_DELAY_MS).await;
        let store = self.store.lock().unwrap();
        store
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Book"))
    }

    async fn create(&self, draft: BookDraft) -> ApiResult<Book> {
        self.simulate(BOOK_WRITE_DELAY_MS).await;
        validate_book_draft(&draft)?;

        let mut store = self.store.lock().unwrap();
        let book = Book {
            id: store.mint_book_id(),
            title: draft.title,
            author: draft.author,
            isbn: draft.isbn,
            description: draft.description,
            publisher: draft.publisher,
            published_date: draft.published_date,
            categories: draft.categories,
            cover_image: draft.cover_image,
            rating: draft.rating,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        store.books.push(book.clone());
        tracing::debug!(id = %book.id, "book created");
        Ok(book)
    }

    async fn update(&self, id: &str, draft: BookDraft) -> ApiResult<Book> {
        self.simulate(BOOK_WRITE_DELAY_MS).await;
        validate_book_draft(&draft)?;

        let mut store = self.store.lock().unwrap();
        let book = store
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| ApiError::not_found("Book"))?;
        book.title = draft.title;
        book.author = draft.author;
        book.isbn = draft.isbn;
        book.description = draft.description;
        book.publisher = draft.publisher;
        book.published_date = draft.published_date;
        book.categories = draft.categories;
        book.cover_image = draft.cover_image;
        book.rating = draft.rating;
        book.updated_at = Some(Utc::now());
        tracing::debug!(id = %book.id, "book updated");
        Ok(book.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary> {
        self.simulate(BOOK_DELETE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let position = store
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| ApiError::not_found("Book"))?;
        let book = store.books.remove(position);
        store.deleted_books.push(book);
        tracing::info!(id, "book deleted");
        Ok(DeleteSummary {
            success: true,
            deleted_id: id.to_string(),
            message: "Book deleted successfully".to_string(),
        })
    }

    async fn batch_delete(&self, ids: &[String]) -> ApiResult<BatchDeleteSummary> {
        self.simulate(BOOK_WRITE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let mut removed = Vec::new();
        store.books.retain(|book| {
            if ids.contains(&book.id) {
                removed.push(book.clone());
                false
            } else {
                true
            }
        });
        let deleted_ids: Vec<String> = removed.iter().map(|book| book.id.clone()).collect();
        let deleted_count = removed.len();
        store.deleted_books.extend(removed);
        tracing::info!(deleted_count, "books batch-deleted");
        Ok(BatchDeleteSummary {
            success: true,
            deleted_count,
            deleted_ids,
            message: format!("Successfully deleted {} books", deleted_count),
        })
    }

    async fn restore(&self, ids: &[String]) -> ApiResult<RestoreSummary> {
        self.simulate(BOOK_WRITE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let mut restored = Vec::new();
        store.deleted_books.retain(|book| {
            if ids.contains(&book.id) {
                restored.push(book.clone());
                false
            } else {
                true
            }
        });
        let restored_count = restored.len();
        store.books.extend(restored);
        tracing::info!(restored_count, "books restored");
        Ok(RestoreSummary {
            success: true,
            restored_count,
            message: format!("Successfully restored {} books", restored_count),
        })
    }
}

#[async_trait]
impl CategoryApi for MockApiClient {
    async fn list(&self, options: CategoryListOptions) -> ApiResult<Page<Category>> {
        self.simulate(CATEGORY_LIST_DELAY_MS).await;
        let mut categories: Vec<Category> = self.store.lock().unwrap().categories.clone();

        if let Some(search) = options.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            categories.retain(|category| category.name.to_lowercase().contains(&needle));
        }
        if let Some(field) = options.sort_by {
            let order = options.sort_order.unwrap_or_default();
            categories.sort_by(|a, b| match field {
                CategorySortField::Name => {
                    ordered(a.name.to_lowercase(), b.name.to_lowercase(), order)
                }
                CategorySortField::BooksCount => ordered(a.books_count, b.books_count, order),
            });
        }

        Ok(paginate(categories, options.page, options.limit))
    }

    async fn get(&self, id: &str) -> ApiResult<Category> {
        self.simulate(CATEGORY_GET_DELAY_MS).await;
        let store = self.store.lock().unwrap();
        store
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Category"))
    }

    async fn create(&self, draft: CategoryDraft) -> ApiResult<Category> {
        self.simulate(CATEGORY_WRITE_DELAY_MS).await;
        validate_category_draft(&draft)?;

        let mut store = self.store.lock().unwrap();
        let category = Category {
            id: store.mint_category_id(),
            name: draft.name,
            description: draft.description,
            books_count: 0,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        store.categories.push(category.clone());
        tracing::debug!(id = %category.id, "category created");
        Ok(category)
    }

    async fn update(&self, id: &str, draft: CategoryDraft) -> ApiResult<Category> {
        self.simulate(CATEGORY_WRITE_DELAY_MS).await;
        validate_category_draft(&draft)?;

        let mut store = self.store.lock().unwrap();
        let category = store
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| ApiError::not_found("Category"))?;
        // Book records keep their denormalized snapshots; a rename here only
        // shows up in books after they are refetched and rebuilt.
        category.name = draft.name;
        category.description = draft.description;
        category.updated_at = Some(Utc::now());
        tracing::debug!(id = %category.id, "category updated");
        Ok(category.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary> {
        self.simulate(CATEGORY_DELETE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let position = store
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| ApiError::not_found("Category"))?;
        store.categories.remove(position);
        tracing::info!(id, "category deleted");
        Ok(DeleteSummary {
            success: true,
            deleted_id: id.to_string(),
            message: "Category deleted successfully".to_string(),
        })
    }
}

#[async_trait]
impl UserApi for MockApiClient {
    async fn list(&self, options: UserListOptions) -> ApiResult<Page<User>> {
        self.simulate(USER_LIST_DELAY_MS).await;
        let mut users: Vec<User> = self.store.lock().unwrap().users.clone();

        if let Some(search) = options.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            users.retain(|user| {
                user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
            });
        }
        if let Some(role) = options.role {
            users.retain(|user| user.role == role);
        }
        if let Some(status) = options.status {
            users.retain(|user| user.status == status);
        }

        Ok(paginate(users, options.page, options.limit))
    }

    async fn get(&self, id: &str) -> ApiResult<User> {
        self.simulate(USER_GET_DELAY_MS).await;
        let store = self.store.lock().unwrap();
        store
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("User"))
    }

    async fn update(&self, id: &str, patch: UserPatch) -> ApiResult<User> {
        self.simulate(USER_WRITE_DELAY_MS).await;
        validate_user_patch(&patch)?;

        let mut store = self.store.lock().unwrap();
        let user = store
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| ApiError::not_found("User"))?;
        patch.apply(user);
        user.updated_at = Some(Utc::now());
        tracing::debug!(id = %user.id, "user updated");
        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary> {
        self.simulate(USER_DELETE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let position = store
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| ApiError::not_found("User"))?;
        let user = store.users.remove(position);
        store.deleted_users.push(user);
        tracing::info!(id, "user deleted");
        Ok(DeleteSummary {
            success: true,
            deleted_id: id.to_string(),
            message: "User deleted successfully".to_string(),
        })
    }

    async fn batch_delete(&self, ids: &[String]) -> ApiResult<BatchDeleteSummary> {
        self.simulate(USER_WRITE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let mut removed = Vec::new();
        store.users.retain(|user| {
            if ids.contains(&user.id) {
                removed.push(user.clone());
                false
            } else {
                true
            }
        });
        let deleted_ids: Vec<String> = removed.iter().map(|user| user.id.clone()).collect();
        let deleted_count = removed.len();
        store.deleted_users.extend(removed);
        tracing::info!(deleted_count, "users batch-deleted");
        Ok(BatchDeleteSummary {
            success: true,
            deleted_count,
            deleted_ids,
            message: format!("Successfully deleted {} users", deleted_count),
        })
    }

    async fn restore(&self, ids: &[String]) -> ApiResult<RestoreSummary> {
        self.simulate(USER_WRITE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let mut restored = Vec::new();
        store.deleted_users.retain(|user| {
            if ids.contains(&user.id) {
                restored.push(user.clone());
                false
            } else {
                true
            }
        });
        let restored_count = restored.len();
        store.users.extend(restored);
        tracing::info!(restored_count, "users restored");
        Ok(RestoreSummary {
            success: true,
            restored_count,
            message: format!("Successfully restored {} users", restored_count),
        })
    }

    async fn change_role(&self, id: &str, role: Role) -> ApiResult<User> {
        self.simulate(USER_WRITE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let user = store
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| ApiError::not_found("User"))?;
        user.role = role;
        user.updated_at = Some(Utc::now());
        tracing::info!(id = %user.id, ?role, "user role changed");
        Ok(user.clone())
    }
}

#[async_trait]
impl DashboardApi for MockApiClient {
    async fn stats(&self) -> ApiResult<DashboardStats> {
        self.simulate(STATS_DELAY_MS).await;
        Ok(self.store.lock().unwrap().stats.clone())
    }
}

#[async_trait]
impl RecommendationApi for MockApiClient {
    async fn settings(&self) -> ApiResult<RecommendationSettings> {
        self.simulate(SETTINGS_GET_DELAY_MS).await;
        Ok(self.store.lock().unwrap().settings.clone())
    }

    async fn update_settings(
        &self,
        settings: RecommendationSettings,
    ) -> ApiResult<RecommendationSettings> {
        self.simulate(SETTINGS_WRITE_DELAY_MS).await;
        validate_settings(&settings)?;
        let mut store = self.store.lock().unwrap();
        store.settings = settings.clone();
        tracing::info!("recommendation settings replaced");
        Ok(settings)
    }
}

#[async_trait]
impl UploadApi for MockApiClient {
    async fn upload(&self, request: UploadRequest) -> ApiResult<UploadedFile> {
        self.simulate(UPLOAD_DELAY_MS).await;
        let payload = request
            .file
            .ok_or_else(|| ApiError::bad_request("No file provided"))?;

        let mut store = self.store.lock().unwrap();
        let id = store.mint_file_id();
        let name = if payload.name.is_empty() {
            id.clone()
        } else {
            payload.name
        };
        let content_type = if payload.content_type.is_empty() {
            "application/octet-stream".to_string()
        } else {
            payload.content_type
        };
        let file = UploadedFile {
            url: format!("https://example.com/uploads/{}", name),
            id,
            name,
            content_type,
            size: payload.size,
            uploaded_at: Utc::now(),
        };
        store.uploaded_files.push(file.clone());
        tracing::debug!(id = %file.id, "file uploaded");
        Ok(file)
    }

    async fn list(&self, options: PageOptions) -> ApiResult<Page<UploadedFile>> {
        self.simulate(FILE_LIST_DELAY_MS).await;
        let files = self.store.lock().unwrap().uploaded_files.clone();
        Ok(paginate(files, options.page, options.limit))
    }

    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary> {
        self.simulate(FILE_DELETE_DELAY_MS).await;
        let mut store = self.store.lock().unwrap();
        let position = store
            .uploaded_files
            .iter()
            .position(|file| file.id == id)
            .ok_or_else(|| ApiError::not_found("File"))?;
        store.uploaded_files.remove(position);
        tracing::info!(id, "uploaded file deleted");
        Ok(DeleteSummary {
            success: true,
            deleted_id: id.to_string(),
            message: "File deleted successfully".to_string(),
        })
    }
}

/// Offset pagination: `items[(page-1)*limit .. (page-1)*limit+limit]`.
fn paginate<T>(items: Vec<T>, page: Option<u32>, limit: Option<u32>) -> Page<T> {
    let page = page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);
    let total = items.len();
    let start = (page as usize - 1).saturating_mul(limit as usize);
    let items = items.into_iter().skip(start).take(limit as usize).collect();
    Page {
        items,
        total,
        page,
        limit,
    }
}

fn ordered<T: Ord>(a: T, b: T, order: SortOrder) -> std::cmp::Ordering {
    match order {
        SortOrder::Asc => a.cmp(&b),
        SortOrder::Desc => b.cmp(&a),
    }
}

fn book_sort_key(book: &Book, field: BookSortField) -> &str {
    match field {
        BookSortField::Title => &book.title,
        BookSortField::Author => &book.author,
        BookSortField::Publisher => &book.publisher,
        BookSortField::PublishedDate => &book.published_date,
    }
}

fn validate_book_draft(draft: &BookDraft) -> ApiResult<()> {
    let mut errors = FieldErrors::new();
    if draft.title.trim().is_empty() {
        errors.insert("title".to_string(), "Title is required".to_string());
    }
    if draft.author.trim().is_empty() {
        errors.insert("author".to_string(), "Author is required".to_string());
    }
    if draft.isbn.trim().is_empty() {
        errors.insert("isbn".to_string(), "ISBN is required".to_string());
    }
    if let Some(rating) = draft.rating {
        if !(0.0..=5.0).contains(&rating) {
            errors.insert(
                "rating".to_string(),
                "Rating must be between 0 and 5".to_string(),
            );
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(errors))
    }
}

fn validate_category_draft(draft: &CategoryDraft) -> ApiResult<()> {
    let mut errors = FieldErrors::new();
    if draft.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(errors))
    }
}

fn validate_user_patch(patch: &UserPatch) -> ApiResult<()> {
    let mut errors = FieldErrors::new();
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            errors.insert("name".to_string(), "Name cannot be empty".to_string());
        }
    }
    if let Some(email) = &patch.email {
        if !email.contains('@') {
            errors.insert("email".to_string(), "Email is invalid".to_string());
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(errors))
    }
}

fn validate_settings(settings: &RecommendationSettings) -> ApiResult<()> {
    let mut errors = FieldErrors::new();
    let weights = [
        ("similarity_threshold", settings.similarity_threshold),
        ("recency_weight", settings.recency_weight),
        ("popularity_weight", settings.popularity_weight),
        ("rating_weight", settings.rating_weight),
    ];
    for (field, value) in weights {
        if !(0.0..=1.0).contains(&value) {
            errors.insert(
                field.to_string(),
                format!("{} must be between 0 and 1", field),
            );
        }
    }
    if settings.max_recommendations == 0 {
        errors.insert(
            "max_recommendations".to_string(),
            "Max recommendations must be at least 1".to_string(),
        );
    }
    if settings.refresh_interval == 0 {
        errors.insert(
            "refresh_interval".to_string(),
            "Refresh interval must be at least 1 hour".to_string(),
        );
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlgorithmType, CategoryRef, UserStatus};

    fn client() -> MockApiClient {
        MockApiClient::with_seed_data().without_latency()
    }

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Test Author".to_string(),
            isbn: "978-0-00-000000-0".to_string(),
            description: "A test book".to_string(),
            publisher: "Test Publisher".to_string(),
            published_date: "2024-01-01".to_string(),
            categories: vec![CategoryRef {
                id: "cat-1".to_string(),
                name: "Category 1".to_string(),
            }],
            cover_image: String::new(),
            rating: None,
        }
    }

    #[tokio::test]
    async fn test_list_search_is_case_insensitive_substring() {
        let api = client();
        let page = BookApi::list(
            &api,
            BookListOptions {
                search: Some("book title 1".to_string()),
                limit: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // book-1 plus book-10..book-19 all contain "Book Title 1".
        assert_eq!(page.total, 11);
        for book in &page.items {
            assert!(book.title.to_lowercase().contains("book title 1"));
        }
    }

    #[tokio::test]
    async fn test_list_search_excludes_non_matches() {
        let api = client();
        let page = BookApi::list(
            &api,
            BookListOptions {
                search: Some("no such book".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_list_sort_desc_is_reverse_of_asc() {
        let api = client();
        let asc = BookApi::list(
            &api,
            BookListOptions {
                sort_by: Some(BookSortField::Author),
                sort_order: Some(SortOrder::Asc),
                limit: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let desc = BookApi::list(
            &api,
            BookListOptions {
                sort_by: Some(BookSortField::Author),
                sort_order: Some(SortOrder::Desc),
                limit: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let mut reversed: Vec<String> = asc.items.iter().map(|b| b.author.clone()).collect();
        reversed.reverse();
        let desc_authors: Vec<String> = desc.items.iter().map(|b| b.author.clone()).collect();
        assert_eq!(desc_authors, reversed);
    }

    #[tokio::test]
    async fn test_pagination_slice_length_law() {
        let api = client();
        for (page_no, limit) in [(1, 10), (2, 10), (3, 10), (1, 7), (3, 7), (5, 7)] {
            let page = BookApi::list(
                &api,
                BookListOptions {
                    page: Some(page_no),
                    limit: Some(limit),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
            let expected = (page.total as i64 - (page_no as i64 - 1) * limit as i64)
                .clamp(0, limit as i64) as usize;
            assert_eq!(page.items.len(), expected, "page {} limit {}", page_no, limit);
        }
    }

    #[tokio::test]
    async fn test_category_filter_matches_snapshot_ids() {
        let api = client();
        let page = BookApi::list(
            &api,
            BookListOptions {
                category: Some("cat-3".to_string()),
                limit: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(page.total > 0);
        for book in &page.items {
            assert!(book.categories.iter().any(|c| c.id == "cat-3"));
        }
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let api = client();
        let err = BookApi::get(&api, "book-999").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Book not found");
    }

    #[tokio::test]
    async fn test_create_persists_into_subsequent_lists() {
        let api = client();
        let created = BookApi::create(&api, draft("A Brand New Book")).await.unwrap();
        assert_eq!(created.id, "book-21");
        assert!(created.created_at.is_some());

        let page = BookApi::list(
            &api,
            BookListOptions {
                search: Some("Brand New".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "book-21");
    }

    #[tokio::test]
    async fn test_create_after_delete_does_not_reuse_ids() {
        let api = client();
        BookApi::delete(&api, "book-20").await.unwrap();
        let created = BookApi::create(&api, draft("Fresh")).await.unwrap();
        // A length-based id would mint book-20 again here.
        assert_eq!(created.id, "book-21");
    }

    #[tokio::test]
    async fn test_create_validates_required_fields() {
        let api = client();
        let err = BookApi::create(&api, BookDraft::default()).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("isbn"));
    }

    #[tokio::test]
    async fn test_update_replaces_editable_fields() {
        let api = client();
        let updated = BookApi::update(&api, "book-3", draft("Renamed")).await.unwrap();
        assert_eq!(updated.id, "book-3");
        assert_eq!(updated.title, "Renamed");
        assert!(updated.updated_at.is_some());

        let fetched = BookApi::get(&api, "book-3").await.unwrap();
        assert_eq!(fetched.title, "Renamed");
    }

    #[tokio::test]
    async fn test_batch_delete_then_restore_round_trip() {
        let api = client();
        let ids = vec!["book-1".to_string(), "book-2".to_string()];

        let summary = BookApi::batch_delete(&api, &ids).await.unwrap();
        assert!(summary.success);
        assert_eq!(summary.deleted_count, 2);
        assert_eq!(summary.deleted_ids, ids);
        assert!(BookApi::get(&api, "book-1").await.unwrap_err().is_not_found());

        let restored = BookApi::restore(&api, &ids).await.unwrap();
        assert_eq!(restored.restored_count, 2);
        assert_eq!(BookApi::get(&api, "book-1").await.unwrap().id, "book-1");
    }

    #[tokio::test]
    async fn test_batch_delete_counts_only_existing_ids() {
        let api = client();
        let ids = vec!["book-1".to_string(), "book-999".to_string()];
        let summary = BookApi::batch_delete(&api, &ids).await.unwrap();
        assert_eq!(summary.deleted_count, 1);
        assert_eq!(summary.deleted_ids, vec!["book-1".to_string()]);
    }

    #[tokio::test]
    async fn test_login_accepts_admin_credentials() {
        let api = client();
        let session = api
            .login(Credentials::new("admin@example.com", "password"))
            .await
            .unwrap();
        assert_eq!(session.user.role, Role::Admin);
        assert!(!session.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let api = client();
        let err = api.login(Credentials::new("x", "y")).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert_eq!(err.message(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_category_rename_leaves_book_snapshots_alone() {
        let api = client();
        CategoryApi::update(
            &api,
            "cat-1",
            CategoryDraft {
                name: "Renamed Category".to_string(),
                description: "".to_string(),
            },
        )
        .await
        .unwrap();

        let book = BookApi::get(&api, "book-1").await.unwrap();
        let snapshot = book.categories.iter().find(|c| c.id == "cat-1").unwrap();
        assert_eq!(snapshot.name, "Category 1");
    }

    #[tokio::test]
    async fn test_toggle_status_via_patch() {
        let api = client();
        let before = UserApi::get(&api, "user-2").await.unwrap();
        let patch = UserPatch {
            status: Some(before.status.toggled()),
            ..Default::default()
        };
        let after = UserApi::update(&api, "user-2", patch).await.unwrap();
        assert_eq!(after.status, before.status.toggled());
        assert_eq!(after.name, before.name);
    }

    #[tokio::test]
    async fn test_user_list_filters_by_role_and_status() {
        let api = client();
        let admins = UserApi::list(
            &api,
            UserListOptions {
                role: Some(Role::Admin),
                limit: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(admins.total, 2);

        let inactive = UserApi::list(
            &api,
            UserListOptions {
                status: Some(UserStatus::Inactive),
                limit: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(inactive.total, 3);
    }

    #[tokio::test]
    async fn test_change_role() {
        let api = client();
        let user = api.change_role("user-5", Role::Admin).await.unwrap();
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_rejected_and_never_appends() {
        let api = client();
        let before = UploadApi::list(&api, PageOptions::default()).await.unwrap();

        let err = api.upload(UploadRequest::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));
        assert_eq!(err.message(), "No file provided");

        let after = UploadApi::list(&api, PageOptions::default()).await.unwrap();
        assert_eq!(after.total, before.total);
    }

    #[tokio::test]
    async fn test_upload_appends_and_synthesizes_metadata() {
        let api = client();
        let file = api
            .upload(UploadRequest::with_file("cover.png", "image/png", 2048))
            .await
            .unwrap();
        assert_eq!(file.id, "file-3");
        assert_eq!(file.url, "https://example.com/uploads/cover.png");

        let page = UploadApi::list(&api, PageOptions::default()).await.unwrap();
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_delete_uploaded_file_not_found() {
        let api = client();
        let err = UploadApi::delete(&api, "file-999").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_settings_update_validates_weights() {
        let api = client();
        let mut settings = api.settings().await.unwrap();
        settings.recency_weight = 1.5;
        let err = api.update_settings(settings).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains_key("recency_weight"));
    }

    #[tokio::test]
    async fn test_settings_update_replaces_whole_record() {
        let api = client();
        let mut settings = api.settings().await.unwrap();
        settings.algorithm_type = AlgorithmType::Content;
        settings.max_recommendations = 5;
        api.update_settings(settings.clone()).await.unwrap();

        let fetched = api.settings().await.unwrap();
        assert_eq!(fetched, settings);
    }

    #[tokio::test]
    async fn test_stats_snapshot() {
        let api = client();
        let stats = api.stats().await.unwrap();
        assert_eq!(stats.total_books, 256);
        assert_eq!(stats.top_categories.len(), 5);
        assert_eq!(stats.user_activity.len(), 6);
    }
}
