// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod booking;
mod error;
mod schedule;
mod service;
mod slot_finder;
mod types;

#[cfg(test)]
mod tests;

pub use booking::{Booking, BookingRequest, NewBooking};
pub use error::DomainError;
pub use schedule::{EmployeeSchedule, ScheduleWindow};
pub use service::Service;
pub use slot_finder::{SLOT_STEP_MINUTES, find_slots, merge_by_start};
pub use types::{BookedInterval, BookingStatus, Customer, Employee, Slot, weekday_index};
