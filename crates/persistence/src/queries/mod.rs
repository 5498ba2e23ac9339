// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic query modules.
//!
//! This module contains all read-only operations for the persistence
//! layer. Every query uses Diesel DSL and works identically on both
//! backends; rows are decoded into domain types at this boundary.
//!
//! ## Module Organization
//!
//! - `services` — Service catalog lookups
//! - `schedules` — Employee availability window lookups
//! - `bookings` — Booking and occupied-interval lookups

pub mod bookings;
pub mod schedules;
pub mod services;

// Re-export backend-specific query functions used by lib.rs
pub use bookings::{
    get_booked_intervals_mysql, get_booked_intervals_sqlite, get_booking_mysql,
    get_booking_sqlite,
};
pub use schedules::{
    get_employee_schedule_mysql, get_employee_schedule_sqlite, get_schedules_for_day_mysql,
    get_schedules_for_day_sqlite,
};
pub use services::{get_service_mysql, get_service_sqlite};
