// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutation operations.
//!
//! Inserts and status updates maintain the slot-guard column
//! (`active_slot`): it is 1 while the booking occupies its slot and
//! NULL otherwise. The `idx_booking_slot_guard` unique index over
//! (employee, appointment time, `active_slot`) rejects a second
//! confirmed booking for the same slot while letting cancelled rows
//! coexist, since SQL treats NULLs as distinct in unique indexes on
//! both backends.

use crate::backend::PersistenceBackend;
use crate::data_models::{BookingRow, NewBookingRow, format_datetime};
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use slotbook_domain::{Booking, BookingStatus, NewBooking};

backend_fn! {

/// Insert a booking row and return it with its assigned identity.
///
/// A uniqueness violation on the slot guard surfaces as
/// `PersistenceError::UniqueViolation`; the engine maps it to the slot
/// no longer being available.
pub fn create_booking(
    conn: &mut _,
    booking: &NewBooking,
) -> Result<Booking, PersistenceError> {
    let row = NewBookingRow {
        customer_id: booking.customer_id,
        employee_id: booking.employee_id,
        service_id: booking.service_id,
        schedule_id: booking.schedule_id,
        appointment_time: format_datetime(booking.appointment_time)?,
        duration_minutes: i32::from(booking.duration_minutes),
        status: booking.status.as_str().to_string(),
        active_slot: if booking.status.occupies_slot() { Some(1) } else { None },
        notes: booking.notes.clone(),
    };

    diesel::insert_into(bookings::table)
        .values(&row)
        .execute(conn)?;

    let booking_id = conn.get_last_insert_rowid()?;

    Ok(Booking {
        booking_id,
        customer_id: booking.customer_id,
        employee_id: booking.employee_id,
        service_id: booking.service_id,
        schedule_id: booking.schedule_id,
        appointment_time: booking.appointment_time,
        duration_minutes: booking.duration_minutes,
        status: booking.status,
        notes: booking.notes.clone(),
    })
}

}

backend_fn! {

/// Update a booking's status, maintaining the slot-guard column, and
/// return the updated row.
pub fn update_booking_status(
    conn: &mut _,
    booking_id: i64,
    status: BookingStatus,
) -> Result<Booking, PersistenceError> {
    let active_slot: Option<i32> = if status.occupies_slot() { Some(1) } else { None };

    let updated = diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::status.eq(status.as_str()),
            bookings::active_slot.eq(active_slot),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("booking {booking_id}")));
    }

    bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("update_booking_status: {e}")))?
        .into_domain()
}

}
