// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-bounded memoization of slot-finder output.
//!
//! The cache is an optimization only. Entries expire a fixed TTL after
//! insertion regardless of access, the whole cache is cleared on every
//! successful booking mutation (conservative invalidation), and no
//! code path may treat a hit as a substitute for the committer's fresh
//! re-check at commit time.

use slotbook_domain::Slot;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use time::Date;

/// Default entry time-to-live.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Default size bound.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Cache key: the queried date plus the employee filter (`None` means
/// "all employees").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// The queried date.
    pub date: Date,
    /// The employee filter, `None` for all employees.
    pub employee_id: Option<i64>,
}

impl CacheKey {
    /// Creates a cache key.
    #[must_use]
    pub const fn new(date: Date, employee_id: Option<i64>) -> Self {
        Self { date, employee_id }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    inserted_at: Instant,
    slots: Vec<Slot>,
}

/// Availability cache with TTL expiry and a size bound.
///
/// When the cache is full, inserting a new key evicts the entry with
/// the oldest insertion time.
#[derive(Debug, Clone)]
pub struct AvailabilityCache {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: Duration,
    capacity: usize,
}

impl Default for AvailabilityCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL, DEFAULT_CACHE_CAPACITY)
    }
}

impl AvailabilityCache {
    /// Creates a cache with the given TTL and size bound.
    ///
    /// A zero capacity is treated as one so inserts are never silently
    /// discarded.
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Looks up a key at the current instant.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<&[Slot]> {
        self.get_at(key, Instant::now())
    }

    /// Looks up a key at an explicit instant.
    ///
    /// An entry is returned only while `now - inserted_at < ttl`; at
    /// exactly `inserted_at + ttl` it is treated as absent.
    #[must_use]
    pub fn get_at(&self, key: &CacheKey, now: Instant) -> Option<&[Slot]> {
        self.entries.get(key).and_then(|entry| {
            if now.duration_since(entry.inserted_at) < self.ttl {
                Some(entry.slots.as_slice())
            } else {
                None
            }
        })
    }

    /// Inserts a slot list at the current instant.
    pub fn insert(&mut self, key: CacheKey, slots: Vec<Slot>) {
        self.insert_at(key, slots, Instant::now());
    }

    /// Inserts a slot list at an explicit instant, evicting the oldest
    /// entry if the cache is full.
    pub fn insert_at(&mut self, key: CacheKey, slots: Vec<Slot>, now: Instant) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(key, _)| *key);
            if let Some(oldest_key) = oldest {
                self.entries.remove(&oldest_key);
            }
        }
        self.entries.insert(
            key,
            CacheEntry {
                inserted_at: now,
                slots,
            },
        );
    }

    /// Clears every entry. Called after every successful booking
    /// mutation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries currently held (including expired ones not
    /// yet overwritten).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
