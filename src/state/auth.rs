//! Authentication store.
//!
//! Holds the session triple `{user, token, is_authenticated}`. Every change
//! is written through to [`SessionStorage`] so the session survives process
//! restarts; logout clears the durable record as well.

use crate::models::{SessionUser, SessionUserPatch};
use crate::storage::{PersistedSession, SessionStorage};

/// Context-injected authentication state container.
///
/// Construct one per context (or per test); there is no ambient global.
/// Login and logout update all three fields atomically, so observers never
/// see a token without its user.
#[derive(Debug)]
pub struct AuthStore {
    storage: SessionStorage,
    user: Option<SessionUser>,
    token: Option<String>,
    is_authenticated: bool,
}

impl AuthStore {
    /// Create a store rehydrated from the given storage.
    pub fn new(storage: SessionStorage) -> Self {
        let persisted = storage.load();
        Self {
            storage,
            user: persisted.user,
            token: persisted.token,
            is_authenticated: persisted.is_authenticated,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Record a successful login. No validation happens here; that is the
    /// API's responsibility.
    pub fn login(&mut self, user: SessionUser, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
        self.persist();
        tracing::info!("session stored");
    }

    /// Clear the session and remove the durable record.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        if !self.storage.clear() {
            tracing::warn!("failed to remove persisted session");
        }
        tracing::info!("session cleared");
    }

    /// Shallow-merge a patch into the session user.
    ///
    /// When no user is present the patch merges into an empty one, so a
    /// stray update never panics or drops data.
    pub fn update_user(&mut self, patch: SessionUserPatch) {
        let mut user = self.user.take().unwrap_or_default();
        patch.apply(&mut user);
        self.user = Some(user);
        self.persist();
    }

    fn persist(&self) {
        let snapshot = PersistedSession {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        };
        if !self.storage.save(&snapshot) {
            tracing::warn!("failed to persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> AuthStore {
        AuthStore::new(SessionStorage::with_path(dir.path().join("session.json")))
    }

    fn admin() -> SessionUser {
        SessionUser {
            id: "user-1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_new_store_is_signed_out() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.user().is_none());
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_sets_all_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.login(admin(), "tok".to_string());

        assert_eq!(store.user().unwrap().role, Role::Admin);
        assert_eq!(store.token(), Some("tok"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = store_in(&dir);
            store.login(admin(), "tok".to_string());
        }

        // A fresh store over the same path plays the part of a reloaded
        // process.
        let rehydrated = store_in(&dir);
        assert!(rehydrated.is_authenticated());
        assert_eq!(rehydrated.user().unwrap().email, "admin@example.com");
        assert_eq!(rehydrated.token(), Some("tok"));
    }

    #[test]
    fn test_logout_clears_state_and_durable_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.login(admin(), "tok".to_string());
        store.logout();

        assert!(store.user().is_none());
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());

        let rehydrated = store_in(&dir);
        assert!(!rehydrated.is_authenticated());
        assert!(rehydrated.user().is_none());
    }

    #[test]
    fn test_update_user_merges_partial() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.login(admin(), "tok".to_string());
        store.update_user(SessionUserPatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        });

        let user = store.user().unwrap();
        assert_eq!(user.name, "Renamed");
        assert_eq!(user.email, "admin@example.com");
    }

    #[test]
    fn test_update_user_without_session_merges_into_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.update_user(SessionUserPatch {
            name: Some("Ghost".to_string()),
            ..Default::default()
        });

        let user = store.user().unwrap();
        assert_eq!(user.name, "Ghost");
        assert_eq!(user.id, "");
        // Merging a patch never flips the authenticated flag.
        assert!(!store.is_authenticated());
    }
}
