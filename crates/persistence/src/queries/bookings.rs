// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking query operations.

use crate::data_models::{BookingRow, format_date};
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use slotbook_domain::{BookedInterval, Booking, BookingStatus};
use time::Date;

backend_fn! {

/// Fetch the occupied intervals for an employee on a date.
///
/// Only confirmed bookings occupy their slot; cancelled and completed
/// rows are excluded in SQL. Appointment timestamps are ISO text, so
/// the day bounds compare lexicographically in chronological order.
///
/// # Backend-agnostic
///
/// This function uses Diesel DSL exclusively.
pub fn get_booked_intervals(
    conn: &mut _,
    employee_id: i64,
    date: Date,
) -> Result<Vec<BookedInterval>, PersistenceError> {
    let date_text = format_date(date)?;
    let day_start = format!("{date_text} 00:00:00");
    let day_end = format!("{date_text} 23:59:59");

    let rows = bookings::table
        .filter(bookings::employee_id.eq(employee_id))
        .filter(bookings::status.eq(BookingStatus::Confirmed.as_str()))
        .filter(bookings::appointment_time.ge(&day_start))
        .filter(bookings::appointment_time.le(&day_end))
        .order(bookings::appointment_time.asc())
        .load::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booked_intervals: {e}")))?;

    rows.into_iter()
        .map(|row| Ok(row.into_domain()?.occupied_interval()))
        .collect()
}

}

backend_fn! {

/// Fetch a booking by ID, `None` if it does not exist.
///
/// # Backend-agnostic
///
/// This function uses Diesel DSL exclusively.
pub fn get_booking(
    conn: &mut _,
    booking_id: i64,
) -> Result<Option<Booking>, PersistenceError> {
    bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking: {e}")))?
        .map(BookingRow::into_domain)
        .transpose()
}

}
