// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The store port the engine reads schedules and bookings through.

use slotbook_domain::{
    Booking, BookedInterval, BookingStatus, EmployeeSchedule, NewBooking, Service,
};
use time::Date;

/// Errors surfaced by a `BookingStore` implementation.
///
/// The engine cares about the category, not the backend detail: an
/// integrity violation during insert means the slot was taken by a
/// concurrent commit, while an operational error is a transient
/// infrastructure problem the caller may retry at a higher level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness or referential constraint was violated.
    Integrity(String),
    /// A transient infrastructure failure (connection, I/O, deadlock).
    Operational(String),
    /// The requested record does not exist.
    NotFound(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integrity(msg) => write!(f, "Store integrity violation: {msg}"),
            Self::Operational(msg) => write!(f, "Store operational error: {msg}"),
            Self::NotFound(msg) => write!(f, "Store record not found: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read/write access to the schedule and booking stores.
///
/// The Schedule Store side (`get_service`, `schedule_for`,
/// `schedules_for_day`) is read-only from the engine's perspective.
/// The Booking Store side is read-written only through the committer.
///
/// `begin`/`commit`/`rollback` delimit a savepoint-scoped unit of work:
/// implementations nest (an inner `begin` under an outer transaction
/// creates a savepoint) and a `rollback` undoes everything since the
/// matching `begin`, never a partial write.
pub trait BookingStore {
    /// Fetches a service by ID, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn get_service(&mut self, service_id: i64) -> Result<Option<Service>, StoreError>;

    /// Fetches the schedule row covering the given employee and date
    /// (matching weekday, date within validity range), `None` if no
    /// row covers it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn schedule_for(
        &mut self,
        employee_id: i64,
        date: Date,
    ) -> Result<Option<EmployeeSchedule>, StoreError>;

    /// Fetches every schedule row covering the given date, across all
    /// employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn schedules_for_day(&mut self, date: Date) -> Result<Vec<EmployeeSchedule>, StoreError>;

    /// Fetches the occupied intervals for an employee on a date,
    /// restricted to confirmed bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn booked_intervals(
        &mut self,
        employee_id: i64,
        date: Date,
    ) -> Result<Vec<BookedInterval>, StoreError>;

    /// Inserts a booking row and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Integrity` if the (employee, time) slot
    /// guard is violated by a concurrent confirmed booking.
    fn insert_booking(&mut self, booking: &NewBooking) -> Result<Booking, StoreError>;

    /// Fetches a booking by ID, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn get_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, StoreError>;

    /// Updates a booking's status and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the booking does not exist.
    fn set_booking_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, StoreError>;

    /// Begins a savepoint-scoped unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    fn begin(&mut self) -> Result<(), StoreError>;

    /// Commits the innermost unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails; the work is rolled back.
    fn commit(&mut self) -> Result<(), StoreError>;

    /// Rolls back the innermost unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if the rollback itself fails.
    fn rollback(&mut self) -> Result<(), StoreError>;
}
