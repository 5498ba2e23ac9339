// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrative creation of employees, customers, services, and
//! schedules.
//!
//! These mutations back the seeding surface of the persistence
//! adapter. The booking engine itself never creates these entities; it
//! only reads them.

use crate::backend::PersistenceBackend;
use crate::data_models::{
    NewCustomerRow, NewEmployeeRow, NewScheduleRow, NewServiceRow, format_date, format_time,
};
use crate::diesel_schema::{customers, employee_schedules, employees, services};
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use slotbook_domain::{Customer, Employee, EmployeeSchedule, Service, weekday_index};

backend_fn! {

/// Insert an employee and return the assigned ID.
pub fn create_employee(
    conn: &mut _,
    employee: &Employee,
) -> Result<i64, PersistenceError> {
    let row = NewEmployeeRow {
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        email: employee.email.clone(),
        is_active: i32::from(employee.is_active),
    };

    diesel::insert_into(employees::table)
        .values(&row)
        .execute(conn)?;

    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Insert a customer and return the assigned ID.
pub fn create_customer(
    conn: &mut _,
    customer: &Customer,
) -> Result<i64, PersistenceError> {
    let row = NewCustomerRow {
        email: customer.email.clone(),
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        notes: customer.notes.clone(),
    };

    diesel::insert_into(customers::table)
        .values(&row)
        .execute(conn)?;

    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Insert a service and return the assigned ID.
pub fn create_service(
    conn: &mut _,
    service: &Service,
) -> Result<i64, PersistenceError> {
    let row = NewServiceRow {
        name: service.name.clone(),
        description: service.description.clone(),
        duration_minutes: i32::from(service.duration_minutes),
        price_cents: service.price_cents,
        is_active: i32::from(service.is_active),
    };

    diesel::insert_into(services::table)
        .values(&row)
        .execute(conn)?;

    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Insert a schedule row and return the assigned ID.
pub fn create_schedule(
    conn: &mut _,
    schedule: &EmployeeSchedule,
) -> Result<i64, PersistenceError> {
    let row = NewScheduleRow {
        employee_id: schedule.employee_id,
        day_of_week: i32::from(weekday_index(schedule.day_of_week)),
        start_time: format_time(schedule.start_time)?,
        end_time: format_time(schedule.end_time)?,
        start_date: format_date(schedule.start_date)?,
        end_date: format_date(schedule.end_date)?,
    };

    diesel::insert_into(employee_schedules::table)
        .values(&row)
        .execute(conn)?;

    conn.get_last_insert_rowid()
}

}
