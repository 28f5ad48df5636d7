//! Libris - state and data core for a book catalog admin console
//!
//! The crate is organized the way the data flows: screens read UI state
//! from the stores, derive a cache key, and fetch through the facade
//! traits; the mock adapter answers after a simulated delay from its
//! in-memory collections; results land back in the per-screen query cache.

pub mod adapters;
pub mod error;
pub mod models;
pub mod query;
pub mod screens;
pub mod state;
pub mod storage;
pub mod traits;
