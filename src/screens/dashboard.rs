//! Dashboard screen coordination.
//!
//! One-shot fetch of the aggregate statistics snapshot; there is nothing
//! to mutate here.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::DashboardStats;
use crate::query::Query;
use crate::traits::DashboardApi;

/// Coordinator for the dashboard screen.
pub struct DashboardScreen {
    api: Arc<dyn DashboardApi>,
    query: Query<(), DashboardStats>,
}

impl DashboardScreen {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            query: Query::new(),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.query.begin(());
        let result = self.api.stats().await;
        self.query.settle(ticket, result);
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.query.data()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.query.error()
    }
}
