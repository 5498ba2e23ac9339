// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability and booking-commit engine.
//!
//! This crate is the orchestration layer between the pure slot finder
//! in `slotbook-domain` and whatever store backs the schedule and
//! booking data. It owns:
//!
//! - the time-bounded availability cache (advisory only, never
//!   authoritative for commit decisions)
//! - the booking committer state machine
//!   (`Pending → Locking → Validating → Committed | Rejected`)
//! - the `BookingStore` and `SlotLock` ports the persistence layer
//!   implements
//!
//! ## Correctness model
//!
//! Slot availability is checked, then acted upon, in two separate
//! steps, so two concurrent requests can both observe the same free
//! slot. The per-(employee, appointment-time) lock serializes commit
//! attempts; the fresh re-validation inside the nested transaction is
//! what actually guarantees at most one booking per slot. A store whose
//! `SlotLock` cannot truly block (the unique-constraint
//! implementation) stays correct because the insert itself fails with
//! an integrity error, which the committer surfaces as
//! "slot no longer available".

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod cache;
mod committer;
mod error;
mod lock;
mod store;

#[cfg(test)]
mod tests;

pub use cache::{AvailabilityCache, CacheKey, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};
pub use committer::CommitPhase;
pub use error::EngineError;
pub use lock::{LockRetryPolicy, SlotLock, slot_lock_key};
pub use store::{BookingStore, StoreError};

use slotbook_domain::BookingRequest;
use time::PrimitiveDateTime;

/// The booking engine: availability queries through the cache, and
/// booking mutations through the committer.
///
/// Generic over the store so tests can run against an in-memory fake
/// and production against the Diesel-backed persistence adapter. The
/// store doubles as the slot lock because both are ultimately the same
/// database session.
pub struct BookingEngine<S: BookingStore + SlotLock> {
    pub(crate) store: S,
    pub(crate) cache: AvailabilityCache,
    pub(crate) retry: LockRetryPolicy,
}

impl<S: BookingStore + SlotLock> BookingEngine<S> {
    /// Creates an engine with the default cache and retry policy.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: AvailabilityCache::default(),
            retry: LockRetryPolicy::default(),
        }
    }

    /// Creates an engine with an explicit cache and retry policy.
    pub const fn with_policies(store: S, cache: AvailabilityCache, retry: LockRetryPolicy) -> Self {
        Self {
            store,
            cache,
            retry,
        }
    }

    /// Gives access to the underlying store.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Gives read access to the availability cache.
    pub const fn cache(&self) -> &AvailabilityCache {
        &self.cache
    }

    /// Validates a booking request against the current wall-clock time
    /// without attempting any lock or store access.
    ///
    /// # Errors
    ///
    /// Returns `AppointmentInPast` if the requested time is before
    /// `now`.
    pub fn validate_request_time(
        request: &BookingRequest,
        now: PrimitiveDateTime,
    ) -> Result<(), EngineError> {
        if request.appointment_time < now {
            return Err(EngineError::AppointmentInPast {
                appointment_time: request.appointment_time,
            });
        }
        Ok(())
    }
}
