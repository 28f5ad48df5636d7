//! Seeded in-memory collections backing the mock API client.
//!
//! The store is the fake system of record: plain vectors mutated in place,
//! plus per-collection trash lists so deleted books and users can be
//! restored. Ids come from monotonic counters that never rewind, so a
//! record created after a delete can never collide with an existing or
//! trashed id.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    AlgorithmType, Book, Category, CategoryCount, CategoryRef, DashboardStats, MonthlyActivity,
    RecommendationSettings, Role, UploadedFile, User, UserStatus,
};

/// Number of seeded books (`book-1`..`book-20`).
pub const SEED_BOOK_COUNT: usize = 20;

/// Number of seeded categories (`cat-1`..`cat-10`).
pub const SEED_CATEGORY_COUNT: usize = 10;

/// Number of seeded users (`user-1`..`user-15`).
pub const SEED_USER_COUNT: usize = 15;

/// Process-lifetime mock data. No teardown; batch deletes mutate in place.
#[derive(Debug)]
pub struct MockDataStore {
    pub books: Vec<Book>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub uploaded_files: Vec<UploadedFile>,
    pub stats: DashboardStats,
    pub settings: RecommendationSettings,
    /// Deleted books, kept so restore can re-insert them.
    pub deleted_books: Vec<Book>,
    /// Deleted users, kept so restore can re-insert them.
    pub deleted_users: Vec<User>,
    next_book_id: u64,
    next_category_id: u64,
    next_file_id: u64,
}

impl MockDataStore {
    /// An empty store with counters at 1 and default settings.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            categories: Vec::new(),
            users: Vec::new(),
            uploaded_files: Vec::new(),
            stats: DashboardStats {
                total_books: 0,
                total_users: 0,
                total_categories: 0,
                total_reviews: 0,
                top_categories: Vec::new(),
                user_activity: Vec::new(),
            },
            settings: seed_settings(),
            deleted_books: Vec::new(),
            deleted_users: Vec::new(),
            next_book_id: 1,
            next_category_id: 1,
            next_file_id: 1,
        }
    }

    /// A store populated with the canned demo collections.
    pub fn with_seed_data() -> Self {
        let books = seed_books();
        let categories = seed_categories();
        let users = seed_users();
        let uploaded_files = seed_uploaded_files();
        Self {
            next_book_id: books.len() as u64 + 1,
            next_category_id: categories.len() as u64 + 1,
            next_file_id: uploaded_files.len() as u64 + 1,
            books,
            categories,
            users,
            uploaded_files,
            stats: seed_stats(),
            settings: seed_settings(),
            deleted_books: Vec::new(),
            deleted_users: Vec::new(),
        }
    }

    /// Mint the next book id. The counter never rewinds on delete.
    pub fn mint_book_id(&mut self) -> String {
        let id = format!("book-{}", self.next_book_id);
        self.next_book_id += 1;
        id
    }

    /// Mint the next category id.
    pub fn mint_category_id(&mut self) -> String {
        let id = format!("cat-{}", self.next_category_id);
        self.next_category_id += 1;
        id
    }

    /// Mint the next uploaded-file id.
    pub fn mint_file_id(&mut self) -> String {
        let id = format!("file-{}", self.next_file_id);
        self.next_file_id += 1;
        id
    }
}

impl Default for MockDataStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed timestamp for seeded records; seed data is deterministic.
fn seed_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn seed_books() -> Vec<Book> {
    (0..SEED_BOOK_COUNT)
        .map(|index| {
            let n = index + 1;
            let cat_a = index % 5 + 1;
            let cat_b = (index + 2) % 5 + 1;
            Book {
                id: format!("book-{}", n),
                title: format!("Book Title {}", n),
                author: format!("Author {}", n),
                isbn: format!("978-3-16-148410-{}", index),
                description: format!(
                    "This is a detailed description for Book {}. It contains information \
                     about the plot, characters, and themes of the book.",
                    n
                ),
                publisher: format!("Publisher {}", index % 5 + 1),
                published_date: format!("202{}-{:02}-{:02}", index % 5, index % 9 + 1, index % 20 + 1),
                categories: vec![
                    CategoryRef {
                        id: format!("cat-{}", cat_a),
                        name: format!("Category {}", cat_a),
                    },
                    CategoryRef {
                        id: format!("cat-{}", cat_b),
                        name: format!("Category {}", cat_b),
                    },
                ],
                cover_image: format!("https://picsum.photos/seed/book{}/200/300", index),
                rating: Some((index * 7 % 51) as f32 / 10.0),
                created_at: None,
                updated_at: None,
            }
        })
        .collect()
}

fn seed_categories() -> Vec<Category> {
    (0..SEED_CATEGORY_COUNT)
        .map(|index| {
            let n = index + 1;
            Category {
                id: format!("cat-{}", n),
                name: format!("Category {}", n),
                description: format!("Description for category {}", n),
                books_count: (index * 7 % 30) as u32,
                created_at: None,
                updated_at: None,
            }
        })
        .collect()
}

fn seed_users() -> Vec<User> {
    (0..SEED_USER_COUNT)
        .map(|index| {
            let n = index + 1;
            let joined = seed_datetime(2023, (index % 12) as u32 + 1, (index % 28) as u32 + 1, 9, 0);
            User {
                id: format!("user-{}", n),
                name: format!("User {}", n),
                email: format!("user{}@example.com", n),
                role: if index < 2 { Role::Admin } else { Role::User },
                status: if index % 5 == 0 {
                    UserStatus::Inactive
                } else {
                    UserStatus::Active
                },
                created_at: joined,
                last_login: if index % 3 == 0 { None } else { Some(joined) },
                updated_at: None,
            }
        })
        .collect()
}

fn seed_uploaded_files() -> Vec<UploadedFile> {
    vec![
        UploadedFile {
            id: "file-1".to_string(),
            name: "cover-image-1.jpg".to_string(),
            url: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80&w=1000"
                .to_string(),
            content_type: "image/jpeg".to_string(),
            size: 234_567,
            uploaded_at: seed_datetime(2023, 11, 10, 8, 30),
        },
        UploadedFile {
            id: "file-2".to_string(),
            name: "cover-image-2.jpg".to_string(),
            url: "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?q=80&w=1000"
                .to_string(),
            content_type: "image/jpeg".to_string(),
            size: 345_678,
            uploaded_at: seed_datetime(2023, 11, 11, 9, 15),
        },
    ]
}

fn seed_stats() -> DashboardStats {
    DashboardStats {
        total_books: 256,
        total_users: 184,
        total_categories: 12,
        total_reviews: 873,
        top_categories: vec![
            CategoryCount {
                name: "Fiction".to_string(),
                count: 78,
            },
            CategoryCount {
                name: "Science Fiction".to_string(),
                count: 52,
            },
            CategoryCount {
                name: "Mystery".to_string(),
                count: 43,
            },
            CategoryCount {
                name: "History".to_string(),
                count: 38,
            },
            CategoryCount {
                name: "Biography".to_string(),
                count: 25,
            },
        ],
        user_activity: vec![
            monthly("Jan", 24, 156),
            monthly("Feb", 18, 132),
            monthly("Mar", 29, 187),
            monthly("Apr", 32, 205),
            monthly("May", 25, 178),
            monthly("Jun", 30, 192),
        ],
    }
}

fn monthly(month: &str, new_users: u32, recommendations: u32) -> MonthlyActivity {
    MonthlyActivity {
        month: month.to_string(),
        new_users,
        recommendations,
    }
}

fn seed_settings() -> RecommendationSettings {
    RecommendationSettings {
        algorithm_type: AlgorithmType::Hybrid,
        similarity_threshold: 0.6,
        max_recommendations: 15,
        include_ratings: true,
        include_genres: true,
        include_popularity: true,
        recency_weight: 0.4,
        popularity_weight: 0.3,
        rating_weight: 0.3,
        refresh_interval: 24,
    }
}
