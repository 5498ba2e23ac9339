// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee weekly availability windows.
//!
//! A schedule row describes one recurring weekday window, valid over a
//! date range so temporary overrides can be seeded alongside the
//! regular hours. Schedules are read-only from the engine's
//! perspective; they are created by administrative seeding.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Time, Weekday};

/// An employee's recurring working hours for one weekday, valid over a
/// date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the schedule has not been persisted yet.
    pub schedule_id: Option<i64>,
    /// The employee this schedule belongs to.
    pub employee_id: i64,
    /// Day of week this window recurs on.
    pub day_of_week: Weekday,
    /// Daily window start (inclusive).
    pub start_time: Time,
    /// Daily window end (exclusive).
    pub end_time: Time,
    /// First date this schedule row is in effect.
    pub start_date: Date,
    /// Last date this schedule row is in effect.
    pub end_date: Date,
}

impl EmployeeSchedule {
    /// Creates a new `EmployeeSchedule` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_time >= end_time` or
    /// `start_date > end_date`.
    pub fn new(
        employee_id: i64,
        day_of_week: Weekday,
        start_time: Time,
        end_time: Time,
        start_date: Date,
        end_date: Date,
    ) -> Result<Self, DomainError> {
        if start_time >= end_time {
            return Err(DomainError::InvalidScheduleWindow {
                start_time,
                end_time,
            });
        }
        if start_date > end_date {
            return Err(DomainError::InvalidScheduleDates {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            schedule_id: None,
            employee_id,
            day_of_week,
            start_time,
            end_time,
            start_date,
            end_date,
        })
    }

    /// Creates an `EmployeeSchedule` with an existing persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the window or date range is invalid.
    pub fn with_id(
        schedule_id: i64,
        employee_id: i64,
        day_of_week: Weekday,
        start_time: Time,
        end_time: Time,
        start_date: Date,
        end_date: Date,
    ) -> Result<Self, DomainError> {
        let mut schedule = Self::new(
            employee_id,
            day_of_week,
            start_time,
            end_time,
            start_date,
            end_date,
        )?;
        schedule.schedule_id = Some(schedule_id);
        Ok(schedule)
    }

    /// Returns whether this schedule is in effect on the given date.
    ///
    /// True when the weekday matches and the date falls inside the
    /// validity range (inclusive on both ends).
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        date.weekday() == self.day_of_week && self.start_date <= date && date <= self.end_date
    }

    /// Materializes the working window `[start_time, end_time)` on the
    /// given date.
    #[must_use]
    pub const fn window_on(&self, date: Date) -> ScheduleWindow {
        ScheduleWindow {
            employee_id: self.employee_id,
            start: PrimitiveDateTime::new(date, self.start_time),
            end: PrimitiveDateTime::new(date, self.end_time),
        }
    }
}

/// A schedule window materialized on a concrete date.
///
/// This is the input the slot finder walks; it carries the employee
/// identity so multi-employee slot lists can be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    /// The employee this window belongs to.
    pub employee_id: i64,
    /// Window start on the target date (inclusive).
    pub start: PrimitiveDateTime,
    /// Window end on the target date (exclusive).
    pub end: PrimitiveDateTime,
}
