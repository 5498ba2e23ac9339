// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FakeStore, seeded_store};
use crate::{BookingEngine, EngineError};
use slotbook_domain::{EmployeeSchedule, Service};
use time::Weekday;
use time::macros::{date, datetime, time};

const MONDAY: time::Date = date!(2026 - 09 - 07);

#[test]
fn test_open_day_returns_full_slot_range() {
    let mut engine = BookingEngine::new(seeded_store());
    let slots = engine.available_slots(MONDAY, 1, Some(1)).unwrap();

    assert_eq!(slots.first().unwrap().start, datetime!(2026-09-07 09:00));
    assert_eq!(slots.first().unwrap().end, datetime!(2026-09-07 09:30));
    assert_eq!(slots.last().unwrap().start, datetime!(2026-09-07 16:30));
    assert_eq!(slots.last().unwrap().end, datetime!(2026-09-07 17:00));
}

#[test]
fn test_unknown_service_is_an_error() {
    let mut engine = BookingEngine::new(seeded_store());
    let result = engine.available_slots(MONDAY, 99, Some(1));
    assert_eq!(result, Err(EngineError::InvalidService { service_id: 99 }));
}

#[test]
fn test_inactive_service_is_an_error() {
    let mut store = seeded_store();
    store
        .services
        .push(Service::with_id(2, "Retired perm", None, 120, 9000, false).unwrap());
    let mut engine = BookingEngine::new(store);

    let result = engine.available_slots(MONDAY, 2, Some(1));
    assert_eq!(result, Err(EngineError::InvalidService { service_id: 2 }));
}

#[test]
fn test_day_without_schedules_yields_no_slots() {
    let mut engine = BookingEngine::new(seeded_store());
    // Tuesday: the seeded schedule only covers Mondays.
    let slots = engine.available_slots(date!(2026 - 09 - 08), 1, None).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn test_all_employees_query_merges_schedules() {
    let mut store = seeded_store();
    store.schedules.push(
        EmployeeSchedule::with_id(
            11,
            2,
            Weekday::Monday,
            time!(10:00),
            time!(12:00),
            date!(2026 - 01 - 01),
            date!(2026 - 12 - 31),
        )
        .unwrap(),
    );
    let mut engine = BookingEngine::new(store);

    let slots = engine.available_slots(MONDAY, 1, None).unwrap();
    assert!(slots.iter().any(|s| s.employee_id == 1));
    assert!(slots.iter().any(|s| s.employee_id == 2));
    for pair in slots.windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }
}

#[test]
fn test_second_lookup_is_served_from_cache() {
    let mut engine = BookingEngine::new(seeded_store());
    let first = engine.available_slots(MONDAY, 1, Some(1)).unwrap();

    // Mutating the store behind the cache's back must not change the
    // answer while the entry is fresh: the cache is advisory and the
    // committer, not this path, is responsible for correctness.
    engine.store_mut().schedules.clear();
    let second = engine.available_slots(MONDAY, 1, Some(1)).unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.cache().len(), 1);
}

#[test]
fn test_commit_invalidates_cached_availability() {
    let mut engine = BookingEngine::new(seeded_store());
    let before = engine.available_slots(MONDAY, 1, Some(1)).unwrap();
    assert!(before.iter().any(|s| s.start == datetime!(2026-09-07 10:00)));

    let request = slotbook_domain::BookingRequest {
        customer_id: 1,
        employee_id: 1,
        service_id: 1,
        appointment_time: datetime!(2026-09-07 10:00),
        notes: None,
    };
    engine
        .create_booking(&request, datetime!(2026-09-01 08:00))
        .unwrap();

    // The post-commit lookup must not see the pre-commit cache entry.
    let after = engine.available_slots(MONDAY, 1, Some(1)).unwrap();
    assert!(!after.iter().any(|s| s.start == datetime!(2026-09-07 10:00)));
    assert_ne!(before, after);
}

#[test]
fn test_cancelled_bookings_do_not_occupy_slots() {
    let request = slotbook_domain::BookingRequest {
        customer_id: 1,
        employee_id: 1,
        service_id: 1,
        appointment_time: datetime!(2026-09-07 10:00),
        notes: None,
    };
    let mut engine = BookingEngine::new(seeded_store());
    let booking = engine
        .create_booking(&request, datetime!(2026-09-01 08:00))
        .unwrap();
    engine.cancel_booking(booking.booking_id).unwrap();

    let slots = engine.available_slots(MONDAY, 1, Some(1)).unwrap();
    assert!(slots.iter().any(|s| s.start == datetime!(2026-09-07 10:00)));
}

#[test]
fn test_store_mut_exposes_fake_for_inspection() {
    let mut engine = BookingEngine::new(FakeStore::new());
    assert_eq!(engine.store_mut().confirmed_count(), 0);
}
