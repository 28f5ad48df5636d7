// Integration tests for the login flow and session persistence.
// A fresh AuthStore over the same storage path plays the part of a
// process restart.

use libris::adapters::MockApiClient;
use libris::models::{Credentials, Role, SessionUser, SessionUserPatch};
use libris::state::AuthStore;
use libris::storage::SessionStorage;
use libris::traits::AuthApi;
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> SessionStorage {
    SessionStorage::with_path(dir.path().join("session.json"))
}

#[tokio::test]
async fn test_login_round_trips_through_restart() {
    let api = MockApiClient::with_seed_data().without_latency();
    let dir = TempDir::new().unwrap();

    let session = api
        .login(Credentials::new("admin@example.com", "password"))
        .await
        .unwrap();
    assert_eq!(session.user.role, Role::Admin);

    {
        let mut store = AuthStore::new(storage_in(&dir));
        store.login(session.user.clone(), session.token.clone());
        assert!(store.is_authenticated());
    }

    // "Reload": a brand-new store instance over the same durable record.
    let rehydrated = AuthStore::new(storage_in(&dir));
    assert!(rehydrated.is_authenticated());
    assert_eq!(rehydrated.user(), Some(&session.user));
    assert_eq!(rehydrated.token(), Some(session.token.as_str()));
}

#[tokio::test]
async fn test_logout_after_restart_clears_durable_record() {
    let api = MockApiClient::with_seed_data().without_latency();
    let dir = TempDir::new().unwrap();

    let session = api
        .login(Credentials::new("admin@example.com", "password"))
        .await
        .unwrap();

    {
        let mut store = AuthStore::new(storage_in(&dir));
        store.login(session.user, session.token);
    }

    {
        let mut reloaded = AuthStore::new(storage_in(&dir));
        assert!(reloaded.is_authenticated());
        reloaded.logout();
        assert!(reloaded.user().is_none());
        assert!(reloaded.token().is_none());
        assert!(!reloaded.is_authenticated());
    }

    // The durable record is gone too: a second restart stays signed out.
    let after = AuthStore::new(storage_in(&dir));
    assert!(!after.is_authenticated());
    assert!(after.user().is_none());
    assert!(!storage_in(&dir).session_path().exists());
}

#[tokio::test]
async fn test_invalid_credentials_are_rejected() {
    let api = MockApiClient::with_seed_data().without_latency();
    let err = api.login(Credentials::new("x", "y")).await.unwrap_err();
    assert_eq!(err.message(), "Invalid email or password");
}

#[test]
fn test_profile_update_persists_across_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = AuthStore::new(storage_in(&dir));
        store.login(
            SessionUser {
                id: "user-1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@example.com".to_string(),
                role: Role::Admin,
            },
            "tok".to_string(),
        );
        store.update_user(SessionUserPatch {
            name: Some("Renamed Admin".to_string()),
            ..Default::default()
        });
    }

    let rehydrated = AuthStore::new(storage_in(&dir));
    let user = rehydrated.user().unwrap();
    assert_eq!(user.name, "Renamed Admin");
    assert_eq!(user.email, "admin@example.com");
}
