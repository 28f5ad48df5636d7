//! Concrete implementations of the facade traits.
//!
//! Today the only adapter is the in-memory mock backend. A real network
//! client would live here as a sibling module implementing the same traits,
//! leaving every call site untouched.
//!
//! # Adapters
//!
//! - [`mock::MockApiClient`] - latency-simulating fake backend over the
//!   in-memory [`mock::MockDataStore`]

pub mod mock;

pub use mock::{MockApiClient, MockDataStore};
