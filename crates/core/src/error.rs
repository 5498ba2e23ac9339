// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;
use slotbook_domain::DomainError;
use time::{Date, PrimitiveDateTime};

/// Errors surfaced by the booking engine.
///
/// The Display impls carry the human-readable reason; the excluded
/// email layer turns these into user-facing text. `LockUnavailable`
/// and `Store(Operational)` are retryable; the rest are fatal to the
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The per-slot lock could not be acquired within the retry budget.
    LockUnavailable {
        /// The contended employee.
        employee_id: i64,
        /// The contended appointment time.
        appointment_time: PrimitiveDateTime,
    },
    /// The requested service is missing or inactive.
    InvalidService {
        /// The requested service ID.
        service_id: i64,
    },
    /// No schedule row covers the employee on the requested date.
    NoScheduleFound {
        /// The requested employee.
        employee_id: i64,
        /// The requested date.
        date: Date,
    },
    /// The requested interval is no longer contained in a free slot.
    SlotNoLongerAvailable {
        /// The requested employee.
        employee_id: i64,
        /// The requested appointment time.
        appointment_time: PrimitiveDateTime,
    },
    /// The booking to mutate does not exist.
    BookingNotFound {
        /// The requested booking ID.
        booking_id: i64,
    },
    /// The requested appointment time is already in the past.
    AppointmentInPast {
        /// The requested appointment time.
        appointment_time: PrimitiveDateTime,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The store failed.
    Store(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockUnavailable {
                employee_id,
                appointment_time,
            } => {
                write!(
                    f,
                    "Could not reserve the {appointment_time} slot for employee {employee_id}; please try again"
                )
            }
            Self::InvalidService { service_id } => {
                write!(f, "Service {service_id} does not exist or is inactive")
            }
            Self::NoScheduleFound { employee_id, date } => {
                write!(f, "Employee {employee_id} has no working schedule on {date}")
            }
            Self::SlotNoLongerAvailable {
                employee_id,
                appointment_time,
            } => {
                write!(
                    f,
                    "The {appointment_time} slot for employee {employee_id} is no longer available"
                )
            }
            Self::BookingNotFound { booking_id } => {
                write!(f, "Booking {booking_id} not found")
            }
            Self::AppointmentInPast { appointment_time } => {
                write!(f, "Appointment time {appointment_time} is in the past")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl EngineError {
    /// Returns whether the caller may usefully retry the same request.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::LockUnavailable { .. } | Self::Store(StoreError::Operational(_))
        )
    }
}
