// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking committer.
//!
//! A booking-creation attempt moves through
//! `Pending → Locking → Validating → Committed | Rejected`. Validation
//! runs inside a savepoint-scoped transaction with the slot lock held
//! and re-reads everything from the store: a cached "available" answer
//! must never race a commit through.

use crate::BookingEngine;
use crate::availability::fresh_slots;
use crate::error::EngineError;
use crate::lock::SlotLock;
use crate::store::{BookingStore, StoreError};
use slotbook_domain::{Booking, BookingRequest, BookingStatus, NewBooking};
use time::{Duration, PrimitiveDateTime};
use tracing::{debug, info, warn};

/// Phases of a single booking-creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitPhase {
    /// Request received, nothing attempted yet.
    #[default]
    Pending,
    /// Acquiring the per-slot lock.
    Locking,
    /// Re-validating under the lock inside the nested transaction.
    Validating,
    /// The booking row is committed.
    Committed,
    /// The attempt failed; the transaction was rolled back.
    Rejected,
}

impl CommitPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Locking => "Locking",
            Self::Validating => "Validating",
            Self::Committed => "Committed",
            Self::Rejected => "Rejected",
        }
    }

    /// Checks if a transition from this phase to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Locking | Rejected
    /// - Locking → Validating | Rejected
    /// - Validating → Committed | Rejected
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Locking)
                | (Self::Pending, Self::Rejected)
                | (Self::Locking, Self::Validating)
                | (Self::Locking, Self::Rejected)
                | (Self::Validating, Self::Committed)
                | (Self::Validating, Self::Rejected)
        )
    }

    /// Advances to the next phase.
    ///
    /// Ordering within one attempt is strict; a bad transition is a
    /// programming error, checked in debug builds.
    #[must_use]
    pub fn step(self, next: Self) -> Self {
        debug_assert!(self.can_transition_to(next), "invalid commit phase step");
        next
    }
}

impl std::fmt::Display for CommitPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<S: BookingStore + SlotLock> BookingEngine<S> {
    /// Creates a booking.
    ///
    /// Past-dated requests are rejected before any lock is attempted.
    /// The lock is acquired with exponential backoff plus jitter,
    /// bounded by the retry budget; validation and the insert run in a
    /// nested transaction, and the availability cache is cleared after
    /// a successful commit. The lock is always released.
    ///
    /// # Arguments
    ///
    /// * `request` - The booking parameters from the caller
    /// * `now` - The current wall-clock time, passed explicitly so
    ///   past-date validation is deterministic
    ///
    /// # Errors
    ///
    /// See [`EngineError`] for the failure taxonomy. No failure leaves
    /// a partially written booking.
    pub fn create_booking(
        &mut self,
        request: &BookingRequest,
        now: PrimitiveDateTime,
    ) -> Result<Booking, EngineError> {
        let mut phase = CommitPhase::Pending;

        if let Err(err) = Self::validate_request_time(request, now) {
            phase = phase.step(CommitPhase::Rejected);
            debug!(phase = %phase, employee_id = request.employee_id, "rejected before locking");
            return Err(err);
        }

        phase = phase.step(CommitPhase::Locking);
        if !self.acquire_with_backoff(request.employee_id, request.appointment_time)? {
            let _ = phase.step(CommitPhase::Rejected);
            return Err(EngineError::LockUnavailable {
                employee_id: request.employee_id,
                appointment_time: request.appointment_time,
            });
        }

        phase = phase.step(CommitPhase::Validating);
        let result = self.validate_and_insert(request);

        if let Err(err) = self
            .store
            .release(request.employee_id, request.appointment_time)
        {
            warn!(error = %err, "failed to release slot lock");
        }

        match result {
            Ok(booking) => {
                self.cache.clear();
                let _ = phase.step(CommitPhase::Committed);
                info!(
                    booking_id = booking.booking_id,
                    employee_id = booking.employee_id,
                    appointment_time = %booking.appointment_time,
                    "booking committed"
                );
                Ok(booking)
            }
            Err(err) => {
                let _ = phase.step(CommitPhase::Rejected);
                debug!(error = %err, "booking rejected");
                Err(err)
            }
        }
    }

    /// Updates a booking's status.
    ///
    /// Follows the same lock → validate-existence → mutate →
    /// invalidate-cache → commit shape as creation, without the slot
    /// re-derivation step. The pre-lock fetch only locates the slot to
    /// lock; the transition check runs again under the lock inside the
    /// transaction, so a concurrent status change cannot slip an
    /// illegal transition through.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if the booking does not exist,
    /// `DomainViolation` for an illegal status transition, or
    /// `LockUnavailable` if the slot lock cannot be acquired.
    pub fn update_booking_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, EngineError> {
        let booking = self
            .store
            .get_booking(booking_id)?
            .ok_or(EngineError::BookingNotFound { booking_id })?;

        if !self.acquire_with_backoff(booking.employee_id, booking.appointment_time)? {
            return Err(EngineError::LockUnavailable {
                employee_id: booking.employee_id,
                appointment_time: booking.appointment_time,
            });
        }

        let result = self.mutate_status(booking_id, status);

        if let Err(err) = self
            .store
            .release(booking.employee_id, booking.appointment_time)
        {
            warn!(error = %err, "failed to release slot lock");
        }

        let updated = result?;
        self.cache.clear();
        info!(booking_id, status = %status, "booking status updated");
        Ok(updated)
    }

    /// Cancels a booking, re-opening its slot.
    ///
    /// # Errors
    ///
    /// See [`BookingEngine::update_booking_status`].
    pub fn cancel_booking(&mut self, booking_id: i64) -> Result<Booking, EngineError> {
        self.update_booking_status(booking_id, BookingStatus::Cancelled)
    }

    /// Marks a booking as completed.
    ///
    /// # Errors
    ///
    /// See [`BookingEngine::update_booking_status`].
    pub fn complete_booking(&mut self, booking_id: i64) -> Result<Booking, EngineError> {
        self.update_booking_status(booking_id, BookingStatus::Completed)
    }

    /// Tries to acquire the per-slot lock with exponential backoff and
    /// jitter. Returns `Ok(false)` when the retry budget is exhausted.
    fn acquire_with_backoff(
        &mut self,
        employee_id: i64,
        appointment_time: PrimitiveDateTime,
    ) -> Result<bool, EngineError> {
        for attempt in 0..self.retry.max_attempts {
            if self.store.try_acquire(employee_id, appointment_time)? {
                return Ok(true);
            }
            // Do not sleep after the final failed attempt.
            if attempt + 1 < self.retry.max_attempts {
                let delay = self.retry.backoff_delay(attempt, self.retry.draw_jitter());
                let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
                debug!(attempt, delay_ms, "slot lock busy, backing off");
                std::thread::sleep(delay);
            }
        }
        Ok(false)
    }

    /// Runs validation and the insert inside a savepoint-scoped
    /// transaction; any failure rolls the whole unit back.
    fn validate_and_insert(&mut self, request: &BookingRequest) -> Result<Booking, EngineError> {
        self.store.begin()?;
        match validate_and_insert_inner(&mut self.store, request) {
            Ok(booking) => {
                self.store.commit()?;
                Ok(booking)
            }
            Err(err) => {
                if let Err(rollback_err) = self.store.rollback() {
                    warn!(error = %rollback_err, "rollback failed after rejected booking");
                }
                Err(err)
            }
        }
    }

    /// Mutates a status inside its own transaction, re-validating the
    /// transition against the current row with the lock held.
    fn mutate_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, EngineError> {
        self.store.begin()?;
        match mutate_status_inner(&mut self.store, booking_id, status) {
            Ok(updated) => {
                self.store.commit()?;
                Ok(updated)
            }
            Err(err) => {
                if let Err(rollback_err) = self.store.rollback() {
                    warn!(error = %rollback_err, "rollback failed after status mutation error");
                }
                Err(err)
            }
        }
    }
}

/// The status-update VALIDATING body: the current row is re-read with
/// the lock held, so the transition check cannot race a concurrent
/// status change.
fn mutate_status_inner<S: BookingStore>(
    store: &mut S,
    booking_id: i64,
    status: BookingStatus,
) -> Result<Booking, EngineError> {
    let current = store
        .get_booking(booking_id)?
        .ok_or(EngineError::BookingNotFound { booking_id })?;
    current.validate_transition(status)?;

    match store.set_booking_status(booking_id, status) {
        Ok(updated) => Ok(updated),
        Err(StoreError::NotFound(_)) => Err(EngineError::BookingNotFound { booking_id }),
        Err(err) => Err(err.into()),
    }
}

/// The VALIDATING body: everything is re-read from the store with the
/// lock held.
fn validate_and_insert_inner<S: BookingStore>(
    store: &mut S,
    request: &BookingRequest,
) -> Result<Booking, EngineError> {
    let service = store
        .get_service(request.service_id)?
        .filter(|service| service.is_active)
        .ok_or(EngineError::InvalidService {
            service_id: request.service_id,
        })?;

    let date = request.appointment_time.date();
    let schedule = store
        .schedule_for(request.employee_id, date)?
        .ok_or(EngineError::NoScheduleFound {
            employee_id: request.employee_id,
            date,
        })?;
    let schedule_id = schedule.schedule_id.ok_or_else(|| {
        EngineError::Store(StoreError::Operational(String::from(
            "schedule row has no identity",
        )))
    })?;

    // Fresh recomputation, bypassing the cache.
    let slots = fresh_slots(store, date, request.service_id, Some(request.employee_id))?;
    let appointment_end =
        request.appointment_time + Duration::minutes(i64::from(service.duration_minutes));
    let contained = slots
        .iter()
        .any(|slot| slot.contains(request.appointment_time, appointment_end));
    if !contained {
        return Err(EngineError::SlotNoLongerAvailable {
            employee_id: request.employee_id,
            appointment_time: request.appointment_time,
        });
    }

    let new_booking = NewBooking {
        customer_id: request.customer_id,
        employee_id: request.employee_id,
        service_id: request.service_id,
        schedule_id,
        appointment_time: request.appointment_time,
        duration_minutes: service.duration_minutes,
        status: BookingStatus::Confirmed,
        notes: request.notes.clone(),
    };

    match store.insert_booking(&new_booking) {
        Ok(booking) => Ok(booking),
        // The slot guard fired: a concurrent commit won the race.
        Err(StoreError::Integrity(_)) => Err(EngineError::SlotNoLongerAvailable {
            employee_id: request.employee_id,
            appointment_time: request.appointment_time,
        }),
        Err(err) => Err(err.into()),
    }
}
