//! Keyed fetch cache.
//!
//! The coordination primitive behind every screen: results are cached by a
//! structurally-equal key (the tuple of filter and pagination values), the
//! current key moves through `idle -> loading -> success | error`, and a
//! key change while a fetch is in flight abandons the old resolution
//! instead of cancelling it.
//!
//! The flow is explicit: [`Query::begin`] hands out a ticket before the
//! async call, [`Query::settle`] applies the result after it. A settled
//! ticket whose generation is no longer current still caches its value
//! under its own key (that data is valid, just not displayed), but never
//! drives phase updates; a ticket older than the last invalidation is
//! dropped entirely, so a mutation can never be papered over by a fetch
//! that raced it.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::ApiError;

/// Lifecycle of the current fetch key.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPhase {
    Idle,
    Loading,
    Success,
    Error(ApiError),
}

/// Proof that a fetch was started; returned by [`Query::begin`] and
/// consumed by [`Query::settle`].
#[derive(Debug)]
pub struct FetchTicket<K> {
    key: K,
    generation: u64,
}

impl<K> FetchTicket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// Keyed fetch cache with stale-while-revalidate display semantics.
#[derive(Debug)]
pub struct Query<K, V> {
    entries: HashMap<K, V>,
    phase: QueryPhase,
    current: Option<K>,
    /// Key whose cached value is shown while the current key loads.
    previous: Option<K>,
    /// Bumped on every `begin`; a ticket is only allowed to drive phase
    /// updates while its generation is still the latest.
    generation: u64,
    /// Generation at the last invalidation; tickets at or below it are
    /// dropped entirely.
    floor: u64,
}

impl<K, V> Query<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            phase: QueryPhase::Idle,
            current: None,
            previous: None,
            generation: 0,
            floor: 0,
        }
    }

    /// Start a fetch cycle for `key` and move the phase to `Loading`.
    ///
    /// If the outgoing key has a cached value it stays displayable through
    /// [`Query::data`] until the new key resolves.
    pub fn begin(&mut self, key: K) -> FetchTicket<K> {
        if let Some(current) = self.current.take() {
            // Only a key with actual data is worth keeping on screen; an
            // outgoing key that never resolved leaves the older one in
            // place.
            if current != key && self.entries.contains_key(&current) {
                self.previous = Some(current);
            }
        }
        self.current = Some(key.clone());
        self.generation += 1;
        self.phase = QueryPhase::Loading;
        FetchTicket {
            key,
            generation: self.generation,
        }
    }

    /// Apply a fetch result.
    ///
    /// Returns `true` when the result drove the phase, `false` when it was
    /// abandoned as stale.
    pub fn settle(&mut self, ticket: FetchTicket<K>, result: Result<V, ApiError>) -> bool {
        if ticket.generation <= self.floor {
            tracing::debug!("fetch resolved after invalidation; dropped");
            return false;
        }
        let fresh = ticket.generation == self.generation;
        match result {
            Ok(value) => {
                // Valid data for its own key even when the screen has moved
                // on; isolation between keys is by cache entry.
                self.entries.insert(ticket.key, value);
                if fresh {
                    self.phase = QueryPhase::Success;
                }
            }
            Err(error) => {
                if fresh {
                    self.phase = QueryPhase::Error(error);
                } else {
                    tracing::debug!(%error, "stale fetch error abandoned");
                }
            }
        }
        fresh
    }

    /// The displayable value: the current key's entry, or the previous
    /// key's while the current one has not resolved yet.
    pub fn data(&self) -> Option<&V> {
        if let Some(current) = &self.current {
            if let Some(value) = self.entries.get(current) {
                return Some(value);
            }
        }
        self.previous.as_ref().and_then(|key| self.entries.get(key))
    }

    /// The cached entry for a specific key, bypassing display semantics.
    pub fn data_for(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == QueryPhase::Loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.phase {
            QueryPhase::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn current_key(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Drop every cached entry and ignore any in-flight resolutions.
    ///
    /// Callers refetch immediately afterwards; until then the phase reads
    /// `Idle` and no data is displayable.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.previous = None;
        self.floor = self.generation;
        self.phase = QueryPhase::Idle;
    }

    /// Drop the cached entry for one key only.
    pub fn invalidate_key(&mut self, key: &K) {
        self.entries.remove(key);
        if self.previous.as_ref() == Some(key) {
            self.previous = None;
        }
    }
}

impl<K, V> Default for Query<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
