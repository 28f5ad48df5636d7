//! Recommendation settings screen coordination.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::RecommendationSettings;
use crate::query::Query;
use crate::screens::forms::FormErrors;
use crate::traits::RecommendationApi;

/// Coordinator for the recommendation settings panel.
pub struct SettingsScreen {
    api: Arc<dyn RecommendationApi>,
    query: Query<(), RecommendationSettings>,
}

impl SettingsScreen {
    pub fn new(api: Arc<dyn RecommendationApi>) -> Self {
        Self {
            api,
            query: Query::new(),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.query.begin(());
        let result = self.api.settings().await;
        self.query.settle(ticket, result);
    }

    /// Replace the settings record wholesale.
    ///
    /// On success the cached copy is refreshed with what the backend
    /// returned; validation failures land in `form` keyed by field.
    pub async fn save(&mut self, settings: RecommendationSettings, form: &mut FormErrors) -> bool {
        match self.api.update_settings(settings).await {
            Ok(updated) => {
                form.clear();
                let ticket = self.query.begin(());
                self.query.settle(ticket, Ok(updated));
                true
            }
            Err(error) => {
                form.absorb(&error);
                false
            }
        }
    }

    pub fn settings(&self) -> Option<&RecommendationSettings> {
        self.query.data()
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.query.error()
    }
}
