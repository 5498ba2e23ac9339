// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and text encodings for persisted booking entities.
//!
//! Dates and times are stored as ISO-8601 text on both backends so the
//! schema stays identical and lexicographic ordering matches
//! chronological ordering. Rows are decoded into domain types at the
//! query boundary; a row that fails domain validation is reported as a
//! corrupt record rather than silently passed through.

use diesel::prelude::*;
use slotbook_domain::{Booking, BookingStatus, Customer, Employee, EmployeeSchedule, Service};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time, Weekday};

use crate::error::PersistenceError;

/// Storage format for calendar dates (`2026-09-07`).
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Storage format for times of day (`09:30:00`).
pub(crate) const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// Storage format for appointment timestamps (`2026-09-07 09:30:00`).
pub(crate) const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("format_date: {e}")))
}

pub(crate) fn parse_date(text: &str) -> Result<Date, PersistenceError> {
    Date::parse(text, DATE_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("invalid date {text:?}: {e}")))
}

pub(crate) fn format_time(time: Time) -> Result<String, PersistenceError> {
    time.format(TIME_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("format_time: {e}")))
}

pub(crate) fn parse_time(text: &str) -> Result<Time, PersistenceError> {
    Time::parse(text, TIME_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("invalid time {text:?}: {e}")))
}

pub(crate) fn format_datetime(datetime: PrimitiveDateTime) -> Result<String, PersistenceError> {
    datetime
        .format(DATETIME_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("format_datetime: {e}")))
}

pub(crate) fn parse_datetime(text: &str) -> Result<PrimitiveDateTime, PersistenceError> {
    PrimitiveDateTime::parse(text, DATETIME_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("invalid datetime {text:?}: {e}")))
}

/// Decodes the persisted 0-6 weekday index (Monday = 0) back to a
/// `time::Weekday`.
pub(crate) fn weekday_from_index(index: i32) -> Result<Weekday, PersistenceError> {
    match index {
        0 => Ok(Weekday::Monday),
        1 => Ok(Weekday::Tuesday),
        2 => Ok(Weekday::Wednesday),
        3 => Ok(Weekday::Thursday),
        4 => Ok(Weekday::Friday),
        5 => Ok(Weekday::Saturday),
        6 => Ok(Weekday::Sunday),
        other => Err(PersistenceError::CorruptRecord(format!(
            "invalid day_of_week index {other}"
        ))),
    }
}

fn duration_from_row(minutes: i32) -> Result<u16, PersistenceError> {
    u16::try_from(minutes)
        .map_err(|_| PersistenceError::CorruptRecord(format!("invalid duration {minutes}")))
}

// ============================================================================
// Query rows
// ============================================================================

/// Raw `services` row.
#[derive(Debug, Queryable)]
pub struct ServiceRow {
    pub service_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub is_active: i32,
}

impl ServiceRow {
    pub(crate) fn into_domain(self) -> Result<Service, PersistenceError> {
        Service::with_id(
            self.service_id,
            &self.name,
            self.description,
            duration_from_row(self.duration_minutes)?,
            self.price_cents,
            self.is_active != 0,
        )
        .map_err(|e| PersistenceError::CorruptRecord(format!("service {}: {e}", self.service_id)))
    }
}

/// Raw `employee_schedules` row.
#[derive(Debug, Queryable)]
pub struct ScheduleRow {
    pub schedule_id: i64,
    pub employee_id: i64,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub start_date: String,
    pub end_date: String,
}

impl ScheduleRow {
    pub(crate) fn into_domain(self) -> Result<EmployeeSchedule, PersistenceError> {
        EmployeeSchedule::with_id(
            self.schedule_id,
            self.employee_id,
            weekday_from_index(self.day_of_week)?,
            parse_time(&self.start_time)?,
            parse_time(&self.end_time)?,
            parse_date(&self.start_date)?,
            parse_date(&self.end_date)?,
        )
        .map_err(|e| PersistenceError::CorruptRecord(format!("schedule {}: {e}", self.schedule_id)))
    }
}

/// Raw `bookings` row.
///
/// `active_slot` is the slot-guard column (1 while the booking occupies
/// its slot, NULL otherwise); it is schema plumbing, not part of the
/// domain booking, and is dropped on decode.
#[derive(Debug, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub customer_id: i64,
    pub employee_id: i64,
    pub service_id: i64,
    pub schedule_id: i64,
    pub appointment_time: String,
    pub duration_minutes: i32,
    pub status: String,
    pub active_slot: Option<i32>,
    pub notes: Option<String>,
}

impl BookingRow {
    pub(crate) fn into_domain(self) -> Result<Booking, PersistenceError> {
        let status: BookingStatus = self.status.parse().map_err(|e| {
            PersistenceError::CorruptRecord(format!("booking {}: {e}", self.booking_id))
        })?;
        Ok(Booking {
            booking_id: self.booking_id,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            service_id: self.service_id,
            schedule_id: self.schedule_id,
            appointment_time: parse_datetime(&self.appointment_time)?,
            duration_minutes: duration_from_row(self.duration_minutes)?,
            status,
            notes: self.notes,
        })
    }
}

/// Raw `employees` row.
#[derive(Debug, Queryable)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: i32,
}

impl EmployeeRow {
    pub(crate) fn into_domain(self) -> Result<Employee, PersistenceError> {
        let mut employee = Employee::new(&self.first_name, &self.last_name, &self.email)
            .map_err(|e| {
                PersistenceError::CorruptRecord(format!("employee {}: {e}", self.employee_id))
            })?;
        employee.employee_id = Some(self.employee_id);
        employee.is_active = self.is_active != 0;
        Ok(employee)
    }
}

/// Raw `customers` row.
#[derive(Debug, Queryable)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub notes: Option<String>,
}

impl CustomerRow {
    pub(crate) fn into_domain(self) -> Result<Customer, PersistenceError> {
        let mut customer =
            Customer::new(&self.email, &self.first_name, &self.last_name).map_err(|e| {
                PersistenceError::CorruptRecord(format!("customer {}: {e}", self.customer_id))
            })?;
        customer.customer_id = Some(self.customer_id);
        customer.notes = self.notes;
        Ok(customer)
    }
}

// ============================================================================
// Insert rows
// ============================================================================

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::diesel_schema::services)]
pub struct NewServiceRow {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub is_active: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::diesel_schema::employee_schedules)]
pub struct NewScheduleRow {
    pub employee_id: i64,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::diesel_schema::bookings)]
pub struct NewBookingRow {
    pub customer_id: i64,
    pub employee_id: i64,
    pub service_id: i64,
    pub schedule_id: i64,
    pub appointment_time: String,
    pub duration_minutes: i32,
    pub status: String,
    pub active_slot: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::diesel_schema::employees)]
pub struct NewEmployeeRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::diesel_schema::customers)]
pub struct NewCustomerRow {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub notes: Option<String>,
}
