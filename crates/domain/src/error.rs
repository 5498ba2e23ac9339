// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::BookingStatus;
use time::{Date, Time};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Schedule start time is not strictly before its end time.
    InvalidScheduleWindow {
        /// The offending start time.
        start_time: Time,
        /// The offending end time.
        end_time: Time,
    },
    /// Schedule validity start date is after its end date.
    InvalidScheduleDates {
        /// The offending start date.
        start_date: Date,
        /// The offending end date.
        end_date: Date,
    },
    /// Service duration must be a positive number of minutes.
    InvalidServiceDuration {
        /// The invalid duration value.
        minutes: i64,
    },
    /// Service price must not be negative.
    InvalidServicePrice {
        /// The invalid price value in cents.
        cents: i64,
    },
    /// Booking status string is not one of the known statuses.
    InvalidBookingStatus(String),
    /// The requested status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: BookingStatus,
        /// The requested status.
        to: BookingStatus,
    },
    /// A name or email field is empty or invalid.
    InvalidField {
        /// The field name.
        field: &'static str,
        /// Description of the validation failure.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScheduleWindow {
                start_time,
                end_time,
            } => {
                write!(
                    f,
                    "Schedule start time {start_time} must be before end time {end_time}"
                )
            }
            Self::InvalidScheduleDates {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Schedule start date {start_date} must not be after end date {end_date}"
                )
            }
            Self::InvalidServiceDuration { minutes } => {
                write!(
                    f,
                    "Invalid service duration: {minutes} minutes. Must be greater than 0"
                )
            }
            Self::InvalidServicePrice { cents } => {
                write!(f, "Invalid service price: {cents} cents. Must not be negative")
            }
            Self::InvalidBookingStatus(status) => {
                write!(f, "Invalid booking status: {status}")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot change booking status from {from} to {to}")
            }
            Self::InvalidField { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
