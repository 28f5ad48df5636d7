//! Recommendation settings facade.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::RecommendationSettings;

/// Singleton recommendation configuration.
///
/// `update_settings` replaces the whole record; there is no partial patch.
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn settings(&self) -> ApiResult<RecommendationSettings>;

    async fn update_settings(
        &self,
        settings: RecommendationSettings,
    ) -> ApiResult<RecommendationSettings>;
}
