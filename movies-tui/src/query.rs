//! Keyed result cache sitting between the view and the movie source.
//!
//! Results are cached per exact `(query, page)`. While another page of the same
//! query loads, the most recently loaded page stays available as placeholder
//! data so the grid never blanks between pages. Identical keys are never
//! fetched twice concurrently. Entries and errors older than the TTL are dropped
//! whenever a fetch resolves, unless they are in flight or back the placeholder.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tmdb::MovieSearchResponse;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: String,
    pub page: u32,
}

impl QueryKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }

    /// Blank queries never fetch.
    pub fn is_enabled(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// Outcome of asking the cache to start loading a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Begin {
    Disabled,
    Hit(MovieSearchResponse),
    InFlight,
    /// Caller must fetch and report back through [`MovieQuery::resolve`].
    Miss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot<'a> {
    pub data: Option<&'a MovieSearchResponse>,
    pub is_loading: bool,
    /// `data` belongs to a previously loaded key.
    pub is_placeholder: bool,
    pub error: Option<&'a str>,
}

#[derive(Debug)]
struct CacheEntry {
    data: MovieSearchResponse,
    fetched_at: Instant,
}

#[derive(Debug)]
struct FailedEntry {
    message: String,
    failed_at: Instant,
}

#[derive(Debug)]
pub struct MovieQuery {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashSet<QueryKey>,
    errors: HashMap<QueryKey, FailedEntry>,
    latest: Option<QueryKey>,
    ttl: Duration,
}

impl MovieQuery {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashSet::new(),
            errors: HashMap::new(),
            latest: None,
            ttl,
        }
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.fetched_at) < self.ttl
    }

    fn evict_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        let in_flight = &self.in_flight;
        let latest = self.latest.as_ref();
        let keep = |key: &QueryKey, at: Instant| {
            now.saturating_duration_since(at) < ttl
                || in_flight.contains(key)
                || latest == Some(key)
        };
        self.entries.retain(|key, entry| keep(key, entry.fetched_at));
        self.errors.retain(|key, failed| keep(key, failed.failed_at));
    }

    pub fn begin(&mut self, key: &QueryKey, now: Instant) -> Begin {
        if !key.is_enabled() {
            return Begin::Disabled;
        }
        if let Some(entry) = self.entries.get(key) {
            if self.is_fresh(entry, now) {
                return Begin::Hit(entry.data.clone());
            }
        }
        if self.in_flight.contains(key) {
            return Begin::InFlight;
        }
        self.errors.remove(key);
        self.in_flight.insert(key.clone());
        Begin::Miss
    }

    /// Record the outcome of a fetch started by [`begin`](Self::begin).
    ///
    /// Failures are remembered for the key but never retried here.
    pub fn resolve(
        &mut self,
        key: &QueryKey,
        result: &tmdb::Result<MovieSearchResponse>,
        now: Instant,
    ) {
        self.in_flight.remove(key);
        match result {
            Ok(data) => {
                self.errors.remove(key);
                self.entries.insert(
                    key.clone(),
                    CacheEntry {
                        data: data.clone(),
                        fetched_at: now,
                    },
                );
                self.latest = Some(key.clone());
            }
            Err(e) => {
                self.errors.insert(
                    key.clone(),
                    FailedEntry {
                        message: e.to_string(),
                        failed_at: now,
                    },
                );
            }
        }
        self.evict_expired(now);
    }

    pub fn observe(&self, key: &QueryKey) -> QuerySnapshot<'_> {
        let is_loading = key.is_enabled() && self.in_flight.contains(key);
        if let Some(entry) = self.entries.get(key) {
            return QuerySnapshot {
                data: Some(&entry.data),
                is_loading,
                is_placeholder: false,
                error: None,
            };
        }

        let placeholder = if is_loading {
            self.latest
                .as_ref()
                .filter(|k| k.query == key.query)
                .and_then(|k| self.entries.get(k))
                .map(|e| &e.data)
        } else {
            None
        };

        QuerySnapshot {
            data: placeholder,
            is_loading,
            is_placeholder: placeholder.is_some(),
            error: self.errors.get(key).map(|f| f.message.as_str()),
        }
    }
}
