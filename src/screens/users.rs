//! Users screen coordination.
//!
//! List keyed by search/role/status/page; the status toggle and deletes
//! invalidate the cache and refetch so the table reflects the mutation.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Page, Role, User, UserListOptions, UserPatch, UserStatus};
use crate::query::Query;
use crate::traits::UserApi;

const DEFAULT_LIMIT: u32 = 10;

/// Cache key for one user list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserListKey {
    pub search: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub page: u32,
    pub limit: u32,
}

impl UserListKey {
    fn options(&self) -> UserListOptions {
        UserListOptions {
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            role: self.role,
            status: self.status,
            page: Some(self.page),
            limit: Some(self.limit),
        }
    }
}

/// Coordinator for the users screen.
pub struct UsersScreen {
    api: Arc<dyn UserApi>,
    query: Query<UserListKey, Page<User>>,
    search: String,
    role: Option<Role>,
    status: Option<UserStatus>,
    page: u32,
    limit: u32,
}

impl UsersScreen {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self {
            api,
            query: Query::new(),
            search: String::new(),
            role: None,
            status: None,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn current_key(&self) -> UserListKey {
        UserListKey {
            search: self.search.clone(),
            role: self.role,
            status: self.status,
            page: self.page,
            limit: self.limit,
        }
    }

    /// Fetch the page for the current filters.
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

    /// Filter by role (page resets to 1) and refetch.
    pub async fn set_role_filter(&mut self, role: Option<Role>) {
        self.role = role;
        self.page = 1;
        self.refresh().await;
    }

    /// Filter by status (page resets to 1) and refetch.
    pub async fn set_status_filter(&mut self, status: Option<UserStatus>) {
        self.status = status;
        self.page = 1;
        self.refresh().await;
    }

    /// Turn to a page and refetch.
    pub async fn turn_page(&mut self, page: u32) {
        self.page = page;
        self.refresh().await;
    }

    /// Flip a user between active and inactive, then refetch.
    pub async fn toggle_status(&mut self, id: &str) -> Result<User, ApiError> {
        // Prefer the row already on screen; fall back to a get for rows
        // toggled from elsewhere.
        let current = match self
            .query
            .data()
            .and_then(|page| page.items.iter().find(|user| user.id == id))
        {
            Some(user) => user.status,
            None => self.api.get(id).await?.status,
        };

        let patch = UserPatch {
            status: Some(current.toggled()),
            ..Default::default()
        };
        let user = self.api.update(id, patch).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(user)
    }

    /// Assign a role, then refetch.
    pub async fn change_role(&mut self, id: &str, role: Role) -> Result<User, ApiError> {
        let user = self.api.change_role(id, role).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(user)
    }

    /// Delete a user, then refetch.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.query.invalidate();
        self.refresh().await;
        Ok(())
    }

    /// The displayable page, with keep-previous semantics during refetch.
    pub fn page(&self) -> Option<&Page<User>> {
        self.query.data()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.query.error()
    }
}
