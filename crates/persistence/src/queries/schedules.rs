// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee schedule query operations.
//!
//! Schedule rows store the weekday as a 0-6 index (Monday = 0) and the
//! validity range as ISO dates. ISO text compares lexicographically in
//! date order, so the range checks run directly in SQL.

use crate::data_models::{ScheduleRow, format_date};
use crate::diesel_schema::employee_schedules;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use slotbook_domain::{EmployeeSchedule, weekday_index};
use time::Date;

backend_fn! {

/// Fetch the schedule row covering an employee on a date, `None` if no
/// row covers it (wrong weekday or outside the validity range).
///
/// # Backend-agnostic
///
/// This function uses Diesel DSL exclusively.
pub fn get_employee_schedule(
    conn: &mut _,
    employee_id: i64,
    date: Date,
) -> Result<Option<EmployeeSchedule>, PersistenceError> {
    let date_text = format_date(date)?;
    let day_index = i32::from(weekday_index(date.weekday()));

    employee_schedules::table
        .filter(employee_schedules::employee_id.eq(employee_id))
        .filter(employee_schedules::day_of_week.eq(day_index))
        .filter(employee_schedules::start_date.le(&date_text))
        .filter(employee_schedules::end_date.ge(&date_text))
        .first::<ScheduleRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_employee_schedule: {e}")))?
        .map(ScheduleRow::into_domain)
        .transpose()
}

}

backend_fn! {

/// Fetch every schedule row covering a date, across all employees,
/// ordered by employee for stable availability output.
///
/// # Backend-agnostic
///
/// This function uses Diesel DSL exclusively.
pub fn get_schedules_for_day(
    conn: &mut _,
    date: Date,
) -> Result<Vec<EmployeeSchedule>, PersistenceError> {
    let date_text = format_date(date)?;
    let day_index = i32::from(weekday_index(date.weekday()));

    employee_schedules::table
        .filter(employee_schedules::day_of_week.eq(day_index))
        .filter(employee_schedules::start_date.le(&date_text))
        .filter(employee_schedules::end_date.ge(&date_text))
        .order(employee_schedules::employee_id.asc())
        .load::<ScheduleRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_schedules_for_day: {e}")))?
        .into_iter()
        .map(ScheduleRow::into_domain)
        .collect()
}

}
