// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-slot advisory locking.
//!
//! The lock serializes commit attempts for one (employee,
//! appointment-time) pair. It reduces wasted validation work under
//! contention; it is not by itself the correctness mechanism. See the
//! crate docs for the full model.

use crate::store::StoreError;
use std::time::Duration;
use time::PrimitiveDateTime;

/// A store-level mutual-exclusion primitive keyed by an
/// application-chosen (employee, appointment-time) identifier.
///
/// Implementations:
/// - advisory-lock-backed, for stores that support it (MySQL
///   `GET_LOCK`)
/// - unique-constraint-based, for stores that don't (SQLite):
///   `try_acquire` always succeeds and the slot-guard unique index
///   turns a double commit into an integrity error at insert
///
/// Both satisfy the same contract: at most one commit per
/// (employee, time).
pub trait SlotLock {
    /// Attempts to acquire the lock without blocking. Returns `false`
    /// if another session holds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn try_acquire(
        &mut self,
        employee_id: i64,
        appointment_time: PrimitiveDateTime,
    ) -> Result<bool, StoreError>;

    /// Releases a previously acquired lock. Releasing a lock that was
    /// never acquired is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn release(
        &mut self,
        employee_id: i64,
        appointment_time: PrimitiveDateTime,
    ) -> Result<(), StoreError>;
}

/// Builds the canonical lock key for an (employee, appointment-time)
/// pair.
///
/// Shared by every `SlotLock` implementation so locks taken through
/// different backends against the same store agree on the key.
#[must_use]
pub fn slot_lock_key(employee_id: i64, appointment_time: PrimitiveDateTime) -> String {
    format!("slotbook:{employee_id}:{appointment_time}")
}

/// Bounded exponential backoff for lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockRetryPolicy {
    /// Maximum number of acquisition attempts before giving up.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles each retry.
    pub base_delay: Duration,
    /// Upper bound on the random jitter added to each delay.
    pub jitter: Duration,
}

impl Default for LockRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            jitter: Duration::from_millis(100),
        }
    }
}

impl LockRetryPolicy {
    /// Computes the backoff delay after the given failed attempt
    /// (0-based): `base * 2^attempt` plus the supplied jitter.
    ///
    /// The jitter is passed in rather than drawn here so the
    /// computation stays deterministic and testable; callers draw it
    /// with [`LockRetryPolicy::draw_jitter`].
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32, jitter: Duration) -> Duration {
        let exponent = attempt.min(16);
        self.base_delay.saturating_mul(1 << exponent) + jitter
    }

    /// Draws a uniformly random jitter in `[0, self.jitter)`.
    #[must_use]
    pub fn draw_jitter(&self) -> Duration {
        let bound = self.jitter.as_millis().max(1);
        let millis = rand::random_range(0..bound);
        Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
    }
}
