// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BookedInterval, BookingStatus};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// A booking-creation request as supplied by the (excluded) email/AI
/// layer.
///
/// The committer re-derives everything else — the schedule row, the
/// service duration, the slot containment — from the stores under its
/// lock; the request carries only what the caller knows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// The customer the appointment is for.
    pub customer_id: i64,
    /// The employee to book.
    pub employee_id: i64,
    /// The requested service.
    pub service_id: i64,
    /// The requested appointment start.
    pub appointment_time: PrimitiveDateTime,
    /// Free-form notes carried onto the booking.
    pub notes: Option<String>,
}

/// A fully validated booking ready for insertion.
///
/// Built by the booking committer after validation; callers never
/// construct one directly. The duration is snapshotted from the service
/// at commit time so later service edits do not shift existing
/// occupied intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    /// The customer the appointment is for.
    pub customer_id: i64,
    /// The employee being booked.
    pub employee_id: i64,
    /// The booked service.
    pub service_id: i64,
    /// The schedule row the appointment falls within.
    pub schedule_id: i64,
    /// Appointment start.
    pub appointment_time: PrimitiveDateTime,
    /// Service duration snapshot in minutes.
    pub duration_minutes: u16,
    /// Initial status; always `Confirmed` for new bookings.
    pub status: BookingStatus,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// A persisted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the database.
    pub booking_id: i64,
    /// The customer the appointment is for.
    pub customer_id: i64,
    /// The employee being booked.
    pub employee_id: i64,
    /// The booked service.
    pub service_id: i64,
    /// The schedule row the appointment falls within.
    pub schedule_id: i64,
    /// Appointment start.
    pub appointment_time: PrimitiveDateTime,
    /// Service duration snapshot in minutes.
    pub duration_minutes: u16,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Booking {
    /// Returns the occupied interval `[appointment_time,
    /// appointment_time + duration)` for this booking.
    #[must_use]
    pub fn occupied_interval(&self) -> BookedInterval {
        BookedInterval::from_appointment(self.appointment_time, self.duration_minutes)
    }

    /// Validates a status transition from this booking's current status.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not permitted.
    pub fn validate_transition(&self, target: BookingStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }
}
