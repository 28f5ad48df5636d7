//! Demo driver for the catalog admin core.
//!
//! Logs in as the seeded admin, walks the dashboard and book list the way
//! the screens would, and exercises the batch-delete page correction.
//! Latency is disabled so the walkthrough stays snappy.

use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use libris::adapters::MockApiClient;
use libris::models::{BookSortField, Credentials, SortOrder};
use libris::screens::{BooksScreen, DashboardScreen, UsersScreen};
use libris::state::AuthStore;
use libris::storage::SessionStorage;
use libris::traits::AuthApi;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Arc::new(MockApiClient::with_seed_data().without_latency());

    // Sign in and persist the session the way the app shell would.
    let session = client
        .login(Credentials::new("admin@example.com", "password"))
        .await?;
    let storage = SessionStorage::new()
        .ok_or_else(|| color_eyre::eyre::eyre!("could not determine home directory"))?;
    let mut auth = AuthStore::new(storage);
    auth.login(session.user.clone(), session.token.clone());
    println!("signed in as {} ({:?})", session.user.name, session.user.role);

    // Dashboard snapshot.
    let mut dashboard = DashboardScreen::new(client.clone());
    dashboard.load().await;
    if let Some(stats) = dashboard.stats() {
        println!(
            "dashboard: {} books, {} users, {} categories, {} reviews",
            stats.total_books, stats.total_users, stats.total_categories, stats.total_reviews
        );
    }

    // Book list: first page, then a filtered and sorted view.
    let mut books = BooksScreen::new(client.clone(), client.clone());
    books.refresh_with_options().await;
    if let Some(page) = books.page() {
        println!(
            "book list: page {}/{} ({} total)",
            page.page,
            page.total.div_ceil(page.limit as usize),
            page.total
        );
    }

    books.set_search("Book Title 1").await;
    books
        .set_sort(BookSortField::Author, SortOrder::Desc)
        .await;
    if let Some(page) = books.page() {
        println!(
            "filtered: {} matches, first is {:?}",
            page.total,
            page.items.first().map(|b| b.title.as_str())
        );
    }

    // Wipe the visible page; the screen lands back on page 1 with data.
    books.reset_filters().await;
    let visible_ids: Vec<String> = books
        .page()
        .map(|page| page.items.iter().map(|b| b.id.clone()).collect())
        .unwrap_or_default();
    let summary = books.batch_delete(&visible_ids).await?;
    println!(
        "batch delete: removed {}, now on page {} with {} rows",
        summary.deleted_count,
        books.state().pagination().page,
        books.page().map(|p| p.items.len()).unwrap_or(0)
    );

    let restored = books.restore(&visible_ids).await?;
    println!("restored {} books", restored.restored_count);

    // Users: toggle the status of the first non-admin.
    let mut users = UsersScreen::new(client.clone());
    users.refresh().await;
    let toggled = users.toggle_status("user-3").await?;
    println!("user-3 is now {:?}", toggled.status);

    auth.logout();
    println!("signed out");
    Ok(())
}
