//! Authentication facade.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Credentials, Session};

/// Session login against the backend.
///
/// Validation of the credentials is the backend's responsibility; the auth
/// store only records whatever session comes back.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session, or fail with `Unauthorized`.
    async fn login(&self, credentials: Credentials) -> ApiResult<Session>;
}
