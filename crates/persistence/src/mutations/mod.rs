// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the
//! persistence layer. Most mutations use Diesel DSL and are
//! backend-agnostic, with minimal use of backend-specific helpers
//! (e.g., `last_insert_rowid()` for `SQLite`).
//!
//! ## Module Organization
//!
//! - `bookings` — Booking insertion and status updates
//! - `seed` — Administrative creation of employees, customers,
//!   services, and schedules
//!
//! ## Backend-Specific Code
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are
//! imported from the `backend` module. All other code uses Diesel DSL
//! exclusively.

pub mod bookings;
pub mod seed;

// Re-export backend-specific mutation functions used by lib.rs
pub use bookings::{
    create_booking_mysql, create_booking_sqlite, update_booking_status_mysql,
    update_booking_status_sqlite,
};
pub use seed::{
    create_customer_mysql, create_customer_sqlite, create_employee_mysql, create_employee_sqlite,
    create_schedule_mysql, create_schedule_sqlite, create_service_mysql, create_service_sqlite,
};
