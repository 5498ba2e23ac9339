// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod availability;

use crate::lock::{SlotLock, slot_lock_key};
use crate::store::{BookingStore, StoreError};
use slotbook_domain::{
    Booking, BookedInterval, BookingStatus, EmployeeSchedule, NewBooking, Service,
};
use std::collections::HashSet;
use time::macros::{date, time};
use time::{Date, Weekday};

/// In-memory fake implementing both engine ports.
///
/// Bookings are snapshotted on `begin` and restored on `rollback` so
/// transaction semantics match the store contract. A plain `HashSet`
/// of lock keys stands in for the advisory lock.
#[derive(Default)]
pub struct FakeStore {
    pub services: Vec<Service>,
    pub schedules: Vec<EmployeeSchedule>,
    pub bookings: Vec<Booking>,
    next_booking_id: i64,
    snapshots: Vec<(Vec<Booking>, i64)>,
    held_locks: HashSet<String>,
    pub deny_locks: bool,
    pub lock_attempts: u32,
    pub forced_insert_error: Option<StoreError>,
    /// Cancels this booking during the next `try_acquire`, simulating
    /// another worker's commit landing between a caller's pre-lock
    /// fetch and its lock grant.
    pub cancel_on_acquire: Option<i64>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            next_booking_id: 1,
            ..Self::default()
        }
    }

    pub fn confirmed_count(&self) -> usize {
        self.bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .count()
    }
}

impl BookingStore for FakeStore {
    fn get_service(&mut self, service_id: i64) -> Result<Option<Service>, StoreError> {
        Ok(self
            .services
            .iter()
            .find(|s| s.service_id == Some(service_id))
            .cloned())
    }

    fn schedule_for(
        &mut self,
        employee_id: i64,
        date: Date,
    ) -> Result<Option<EmployeeSchedule>, StoreError> {
        Ok(self
            .schedules
            .iter()
            .find(|s| s.employee_id == employee_id && s.covers(date))
            .cloned())
    }

    fn schedules_for_day(&mut self, date: Date) -> Result<Vec<EmployeeSchedule>, StoreError> {
        Ok(self
            .schedules
            .iter()
            .filter(|s| s.covers(date))
            .cloned()
            .collect())
    }

    fn booked_intervals(
        &mut self,
        employee_id: i64,
        date: Date,
    ) -> Result<Vec<BookedInterval>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| {
                b.employee_id == employee_id
                    && b.status.occupies_slot()
                    && b.appointment_time.date() == date
            })
            .map(Booking::occupied_interval)
            .collect())
    }

    fn insert_booking(&mut self, booking: &NewBooking) -> Result<Booking, StoreError> {
        if let Some(err) = self.forced_insert_error.take() {
            return Err(err);
        }
        let conflict = self.bookings.iter().any(|b| {
            b.employee_id == booking.employee_id
                && b.appointment_time == booking.appointment_time
                && b.status.occupies_slot()
        });
        if conflict {
            return Err(StoreError::Integrity(String::from(
                "UNIQUE constraint failed: bookings.employee_id, bookings.appointment_time",
            )));
        }
        let persisted = Booking {
            booking_id: self.next_booking_id,
            customer_id: booking.customer_id,
            employee_id: booking.employee_id,
            service_id: booking.service_id,
            schedule_id: booking.schedule_id,
            appointment_time: booking.appointment_time,
            duration_minutes: booking.duration_minutes,
            status: booking.status,
            notes: booking.notes.clone(),
        };
        self.next_booking_id += 1;
        self.bookings.push(persisted.clone());
        Ok(persisted)
    }

    fn get_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned())
    }

    fn set_booking_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| StoreError::NotFound(format!("booking {booking_id}")))?;
        booking.status = status;
        Ok(booking.clone())
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        self.snapshots
            .push((self.bookings.clone(), self.next_booking_id));
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.snapshots
            .pop()
            .map(|_| ())
            .ok_or_else(|| StoreError::Operational(String::from("commit without begin")))
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        let (bookings, next_id) = self
            .snapshots
            .pop()
            .ok_or_else(|| StoreError::Operational(String::from("rollback without begin")))?;
        self.bookings = bookings;
        self.next_booking_id = next_id;
        Ok(())
    }
}

impl SlotLock for FakeStore {
    fn try_acquire(
        &mut self,
        employee_id: i64,
        appointment_time: time::PrimitiveDateTime,
    ) -> Result<bool, StoreError> {
        self.lock_attempts += 1;
        if let Some(id) = self.cancel_on_acquire.take() {
            if let Some(booking) = self.bookings.iter_mut().find(|b| b.booking_id == id) {
                booking.status = BookingStatus::Cancelled;
            }
        }
        if self.deny_locks {
            return Ok(false);
        }
        Ok(self
            .held_locks
            .insert(slot_lock_key(employee_id, appointment_time)))
    }

    fn release(
        &mut self,
        employee_id: i64,
        appointment_time: time::PrimitiveDateTime,
    ) -> Result<(), StoreError> {
        self.held_locks
            .remove(&slot_lock_key(employee_id, appointment_time));
        Ok(())
    }
}

/// Store with one employee working Mondays 09:00-17:00 through 2026
/// and one active 30-minute service (id 1).
pub fn seeded_store() -> FakeStore {
    let mut store = FakeStore::new();
    store.services.push(
        Service::with_id(1, "Haircut", None, 30, 2500, true).unwrap(),
    );
    store.schedules.push(
        EmployeeSchedule::with_id(
            10,
            1,
            Weekday::Monday,
            time!(09:00),
            time!(17:00),
            date!(2026 - 01 - 01),
            date!(2026 - 12 - 31),
        )
        .unwrap(),
    );
    store
}
