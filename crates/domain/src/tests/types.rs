// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookedInterval, BookingStatus, Customer, DomainError, Employee, Slot, weekday_index};
use std::str::FromStr;
use time::Weekday;
use time::macros::datetime;

#[test]
fn test_booking_status_round_trip() {
    for status in [
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ] {
        assert_eq!(BookingStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_booking_status_rejects_unknown_string() {
    let result = BookingStatus::from_str("pending");
    assert_eq!(
        result,
        Err(DomainError::InvalidBookingStatus(String::from("pending")))
    );
}

#[test]
fn test_confirmed_transitions_to_terminal_states() {
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
}

#[test]
fn test_terminal_statuses_do_not_transition() {
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Completed));
    assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Confirmed));
    assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Cancelled));
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
}

#[test]
fn test_only_confirmed_occupies_slot() {
    assert!(BookingStatus::Confirmed.occupies_slot());
    assert!(!BookingStatus::Cancelled.occupies_slot());
    assert!(!BookingStatus::Completed.occupies_slot());
}

#[test]
fn test_booked_interval_half_open_overlap() {
    let interval = BookedInterval::from_appointment(datetime!(2026-09-07 10:00), 60);
    assert_eq!(interval.end, datetime!(2026-09-07 11:00));

    // Touching endpoints do not overlap.
    assert!(!interval.overlaps(datetime!(2026-09-07 09:30), datetime!(2026-09-07 10:00)));
    assert!(!interval.overlaps(datetime!(2026-09-07 11:00), datetime!(2026-09-07 11:30)));

    // Any shared interior point overlaps.
    assert!(interval.overlaps(datetime!(2026-09-07 09:45), datetime!(2026-09-07 10:15)));
    assert!(interval.overlaps(datetime!(2026-09-07 10:30), datetime!(2026-09-07 11:30)));
    assert!(interval.overlaps(datetime!(2026-09-07 10:15), datetime!(2026-09-07 10:45)));
    assert!(interval.overlaps(datetime!(2026-09-07 09:00), datetime!(2026-09-07 12:00)));
}

#[test]
fn test_slot_containment_is_inclusive_on_both_ends() {
    let slot = Slot {
        start: datetime!(2026-09-07 10:00),
        end: datetime!(2026-09-07 10:30),
        duration_minutes: 30,
        employee_id: 1,
    };
    assert!(slot.contains(datetime!(2026-09-07 10:00), datetime!(2026-09-07 10:30)));
    assert!(!slot.contains(datetime!(2026-09-07 09:45), datetime!(2026-09-07 10:15)));
    assert!(!slot.contains(datetime!(2026-09-07 10:15), datetime!(2026-09-07 10:45)));
}

#[test]
fn test_weekday_index_is_monday_based() {
    assert_eq!(weekday_index(Weekday::Monday), 0);
    assert_eq!(weekday_index(Weekday::Sunday), 6);
}

#[test]
fn test_employee_requires_nonempty_fields() {
    assert!(Employee::new("Ada", "Lovelace", "ada@example.com").is_ok());
    assert!(Employee::new("", "Lovelace", "ada@example.com").is_err());
    assert!(Employee::new("Ada", "Lovelace", "   ").is_err());
}

#[test]
fn test_customer_requires_nonempty_fields() {
    assert!(Customer::new("kay@example.com", "Kay", "McNulty").is_ok());
    assert!(Customer::new("", "Kay", "McNulty").is_err());
}
