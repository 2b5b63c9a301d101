//! Write-once memo caches for overlapping-subproblem recursion.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Caller-owned cache mapping a subproblem index to its result.
///
/// A key, once written, keeps its first value: [`MemoCache::insert`] never
/// overwrites. Hit and miss counters make reuse observable in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoCache {
    values: HashMap<u32, i64>,
    hits: u64,
    misses: u64,
}

impl MemoCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `n`, counting the hit or miss.
    pub fn lookup(&mut self, n: u32) -> Option<i64> {
        match self.values.get(&n) {
            Some(&value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Peek at `n` without touching the counters.
    pub fn get(&self, n: u32) -> Option<i64> {
        self.values.get(&n).copied()
    }

    /// Store `value` for `n` unless a value is already present. Returns the
    /// value now held for `n`.
    pub fn insert(&mut self, n: u32, value: i64) -> i64 {
        *self.values.entry(n).or_insert(value)
    }

    /// Whether a value is stored for `n`.
    pub fn contains(&self, n: u32) -> bool {
        self.values.contains_key(&n)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that found nothing.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Read-only view of the stored entries.
    pub fn entries(&self) -> &HashMap<u32, i64> {
        &self.values
    }
}

impl From<HashMap<u32, i64>> for MemoCache {
    fn from(values: HashMap<u32, i64>) -> Self {
        Self {
            values,
            hits: 0,
            misses: 0,
        }
    }
}

/// A memo cache that can be shared across threads.
///
/// Reads and the check-then-insert both happen under one mutex, so when two
/// threads race to fill the same key the first insert wins and the second
/// observes it.
#[derive(Debug, Default)]
pub struct SharedMemoCache {
    values: Mutex<HashMap<u32, i64>>,
}

impl SharedMemoCache {
    /// Create a new, empty shared cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, HashMap<u32, i64>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stored value for `n`, if any.
    pub fn get(&self, n: u32) -> Option<i64> {
        self.map().get(&n).copied()
    }

    /// Store `value` for `n` unless already present; returns the held value.
    pub fn insert(&self, n: u32, value: i64) -> i64 {
        *self.map().entry(n).or_insert(value)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    /// True if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    /// Copy of the stored entries.
    pub fn snapshot(&self) -> HashMap<u32, i64> {
        self.map().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_never_overwrites() {
        let mut cache = MemoCache::new();
        assert_eq!(cache.insert(5, 5), 5);
        assert_eq!(cache.insert(5, 99), 5);
        assert_eq!(cache.get(5), Some(5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn lookup_counts_hits_and_misses() {
        let mut cache = MemoCache::new();
        assert_eq!(cache.lookup(3), None);
        cache.insert(3, 2);
        assert_eq!(cache.lookup(3), Some(2));
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }

    #[test]
    fn shared_insert_first_writer_wins() {
        let cache = SharedMemoCache::new();
        assert_eq!(cache.insert(7, 13), 13);
        assert_eq!(cache.insert(7, 0), 13);
        assert_eq!(cache.get(7), Some(13));
    }
}
