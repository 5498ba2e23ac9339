// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::Persistence;
use slotbook_domain::{Customer, Employee, EmployeeSchedule, Service};
use time::Weekday;
use time::macros::{date, time};

/// IDs assigned to the standard fixture rows.
pub struct Fixture {
    pub employee_id: i64,
    pub customer_id: i64,
    pub service_id: i64,
    pub schedule_id: i64,
}

/// Seeds a fresh in-memory database with one employee, one customer,
/// a 30-minute service, and a Monday 09:00-17:00 schedule valid
/// through 2026.
pub fn seeded_persistence() -> (Persistence, Fixture) {
    let mut persistence = Persistence::new_in_memory().expect("in-memory database");

    let employee = Employee::new("Avery", "Quinn", "avery@example.com").unwrap();
    let employee_id = persistence.create_employee(&employee).unwrap();

    let customer = Customer::new("casey@example.com", "Casey", "Reed").unwrap();
    let customer_id = persistence.create_customer(&customer).unwrap();

    let service = Service::new("Haircut", 30, 2500).unwrap();
    let service_id = persistence.create_service(&service).unwrap();

    let schedule = EmployeeSchedule::new(
        employee_id,
        Weekday::Monday,
        time!(09:00),
        time!(17:00),
        date!(2026 - 01 - 01),
        date!(2026 - 12 - 31),
    )
    .unwrap();
    let schedule_id = persistence.create_schedule(&schedule).unwrap();

    (
        persistence,
        Fixture {
            employee_id,
            customer_id,
            service_id,
            schedule_id,
        },
    )
}
