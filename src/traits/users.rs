//! User resource facade.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    BatchDeleteSummary, DeleteSummary, Page, RestoreSummary, Role, User, UserListOptions,
    UserPatch,
};

/// User management operations.
///
/// Unlike books, user updates are partial patches; only the provided fields
/// override the stored record.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list(&self, options: UserListOptions) -> ApiResult<Page<User>>;

    /// Fetch a single user by id, or fail with `NotFound`.
    async fn get(&self, id: &str) -> ApiResult<User>;

    /// Patch a user and stamp `updated_at`.
    async fn update(&self, id: &str, patch: UserPatch) -> ApiResult<User>;

    async fn delete(&self, id: &str) -> ApiResult<DeleteSummary>;

    /// Delete every user whose id is in `ids`.
    async fn batch_delete(&self, ids: &[String]) -> ApiResult<BatchDeleteSummary>;

    /// Re-insert previously deleted users matching `ids`.
    async fn restore(&self, ids: &[String]) -> ApiResult<RestoreSummary>;

    /// Assign a new role to a user.
    async fn change_role(&self, id: &str, role: Role) -> ApiResult<User>;
}
