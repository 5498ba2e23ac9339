// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{PrimitiveDateTime, Weekday};

/// Represents the lifecycle status of a booking.
///
/// Bookings are never physically deleted; cancellation is a status
/// change so the audit trail is preserved and the slot re-opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// The booking occupies its slot.
    #[default]
    Confirmed,
    /// The booking was cancelled; its slot is free again.
    Cancelled,
    /// The appointment took place.
    Completed,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Confirmed → Cancelled
    /// - Confirmed → Completed
    ///
    /// Cancelled and Completed are terminal.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Confirmed, Self::Cancelled) | (Self::Confirmed, Self::Completed)
        )
    }

    /// Returns whether a booking in this status occupies its slot.
    #[must_use]
    pub const fn occupies_slot(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// A candidate appointment window of fixed duration, free of conflicts.
///
/// Slots are ephemeral values produced by the slot finder. They are
/// never persisted, only cached transiently, and a cached slot is
/// never authoritative for commit decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start (inclusive).
    pub start: PrimitiveDateTime,
    /// Slot end (exclusive).
    pub end: PrimitiveDateTime,
    /// Slot length in minutes; always equals the requested service duration.
    pub duration_minutes: u16,
    /// The employee this slot belongs to.
    pub employee_id: i64,
}

impl Slot {
    /// Returns whether the half-open interval `[start, end)` of the
    /// given appointment is fully contained in this slot.
    #[must_use]
    pub fn contains(&self, start: PrimitiveDateTime, end: PrimitiveDateTime) -> bool {
        self.start <= start && self.end >= end
    }
}

/// A half-open occupied interval `[start, end)` derived from a
/// confirmed booking and its service duration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    /// Interval start (inclusive).
    pub start: PrimitiveDateTime,
    /// Interval end (exclusive).
    pub end: PrimitiveDateTime,
}

impl BookedInterval {
    /// Builds the occupied interval for an appointment of the given length.
    #[must_use]
    pub fn from_appointment(start: PrimitiveDateTime, duration_minutes: u16) -> Self {
        Self {
            start,
            end: start + time::Duration::minutes(i64::from(duration_minutes)),
        }
    }

    /// Half-open interval overlap test.
    ///
    /// `[a, b)` overlaps `[c, d)` iff `a < d && b > c`. Touching
    /// endpoints do not overlap.
    #[must_use]
    pub fn overlaps(&self, start: PrimitiveDateTime, end: PrimitiveDateTime) -> bool {
        start < self.end && end > self.start
    }
}

/// An employee who can be booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the employee has not been persisted yet.
    pub employee_id: Option<i64>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// Whether the employee currently accepts bookings.
    pub is_active: bool,
}

impl Employee {
    /// Creates a new `Employee` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or email is empty.
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Result<Self, DomainError> {
        validate_nonempty("first name", first_name)?;
        validate_nonempty("last name", last_name)?;
        validate_nonempty("email", email)?;
        Ok(Self {
            employee_id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            is_active: true,
        })
    }
}

/// A customer on whose behalf bookings are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the customer has not been persisted yet.
    pub customer_id: Option<i64>,
    /// Unique email address; the inbound email layer keys on this.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Customer {
    /// Creates a new `Customer` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or email is empty.
    pub fn new(email: &str, first_name: &str, last_name: &str) -> Result<Self, DomainError> {
        validate_nonempty("email", email)?;
        validate_nonempty("first name", first_name)?;
        validate_nonempty("last name", last_name)?;
        Ok(Self {
            customer_id: None,
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            notes: None,
        })
    }
}

/// Converts a `time::Weekday` to the persisted 0-6 index (Monday = 0).
#[must_use]
pub const fn weekday_index(weekday: Weekday) -> u8 {
    weekday.number_days_from_monday()
}

pub(crate) fn validate_nonempty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidField {
            field,
            reason: String::from("must not be empty"),
        });
    }
    Ok(())
}
