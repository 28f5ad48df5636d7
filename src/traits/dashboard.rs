//! Dashboard facade.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::DashboardStats;

/// Read-only aggregate statistics for the dashboard screen.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn stats(&self) -> ApiResult<DashboardStats>;
}
