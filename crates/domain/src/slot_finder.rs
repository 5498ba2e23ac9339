// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Free-slot discovery within a schedule window.
//!
//! This is the pure core of the availability engine. Given a working
//! window, the occupied intervals for that employee, and a requested
//! service duration, it produces every admissible slot.
//!
//! ## Invariants
//!
//! - Candidate starts advance at a fixed 15-minute step
//! - A candidate `[t, t+duration)` is rejected iff it overlaps any
//!   occupied interval under the half-open test
//!   (`t < occupied_end && t+duration > occupied_start`)
//! - No slot extends past the window end
//! - Output is ordered ascending by start time
//! - No I/O, no side effects; identical inputs yield identical output

use crate::schedule::ScheduleWindow;
use crate::types::{BookedInterval, Slot};
use time::Duration;

/// Granularity at which candidate slot starts are generated.
pub const SLOT_STEP_MINUTES: i64 = 15;

/// Finds every admissible slot of `duration_minutes` within the window.
///
/// # Arguments
///
/// * `window` - The working window on the target date
/// * `booked` - Occupied intervals for the window's employee on that date
/// * `duration_minutes` - The requested service duration
///
/// # Returns
///
/// Slots ordered ascending by start time, each exactly
/// `duration_minutes` long and overlapping no occupied interval.
#[must_use]
pub fn find_slots(
    window: &ScheduleWindow,
    booked: &[BookedInterval],
    duration_minutes: u16,
) -> Vec<Slot> {
    let duration = Duration::minutes(i64::from(duration_minutes));
    let step = Duration::minutes(SLOT_STEP_MINUTES);

    let mut slots = Vec::new();
    let mut current = window.start;
    while current + duration <= window.end {
        let candidate_end = current + duration;
        let occupied = booked
            .iter()
            .any(|interval| interval.overlaps(current, candidate_end));
        if !occupied {
            slots.push(Slot {
                start: current,
                end: candidate_end,
                duration_minutes,
                employee_id: window.employee_id,
            });
        }
        current += step;
    }
    slots
}

/// Merges per-employee slot lists into one list ordered by start time.
///
/// Uses a stable sort so ties (same start, different employee) retain
/// discovery order.
#[must_use]
pub fn merge_by_start(lists: Vec<Vec<Slot>>) -> Vec<Slot> {
    let mut merged: Vec<Slot> = lists.into_iter().flatten().collect();
    merged.sort_by(|a, b| a.start.cmp(&b.start));
    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn window_9_to_5() -> ScheduleWindow {
        ScheduleWindow {
            employee_id: 1,
            start: datetime!(2026-09-07 09:00),
            end: datetime!(2026-09-07 17:00),
        }
    }

    fn booked(start: time::PrimitiveDateTime, minutes: u16) -> BookedInterval {
        BookedInterval::from_appointment(start, minutes)
    }

    #[test]
    fn test_empty_day_first_and_last_slot() {
        let slots = find_slots(&window_9_to_5(), &[], 30);

        let first = slots.first().unwrap();
        assert_eq!(first.start, datetime!(2026-09-07 09:00));
        assert_eq!(first.end, datetime!(2026-09-07 09:30));

        let last = slots.last().unwrap();
        assert_eq!(last.start, datetime!(2026-09-07 16:30));
        assert_eq!(last.end, datetime!(2026-09-07 17:00));

        // 09:00 through 16:30 inclusive at 15-minute steps.
        assert_eq!(slots.len(), 31);
    }

    #[test]
    fn test_every_slot_has_requested_duration_and_stays_in_window() {
        let window = window_9_to_5();
        let occupied = vec![booked(datetime!(2026-09-07 11:00), 45)];
        let slots = find_slots(&window, &occupied, 30);

        for slot in &slots {
            assert_eq!(slot.end - slot.start, Duration::minutes(30));
            assert_eq!(slot.duration_minutes, 30);
            assert!(slot.start >= window.start);
            assert!(slot.end <= window.end);
            assert_eq!(slot.employee_id, 1);
        }
    }

    #[test]
    fn test_overlapping_starts_excluded_around_existing_booking() {
        // Existing 60-minute booking at 10:00 means no 30-minute slot
        // may start in [09:45, 11:00).
        let occupied = vec![booked(datetime!(2026-09-07 10:00), 60)];
        let slots = find_slots(&window_9_to_5(), &occupied, 30);

        for slot in &slots {
            assert!(
                slot.start < datetime!(2026-09-07 09:45) || slot.start >= datetime!(2026-09-07 11:00),
                "slot starting {} overlaps the 10:00-11:00 booking",
                slot.start
            );
        }
        // The boundary slots themselves survive: 09:30-10:00 and 11:00-11:30.
        assert!(slots.iter().any(|s| s.start == datetime!(2026-09-07 09:30)));
        assert!(slots.iter().any(|s| s.start == datetime!(2026-09-07 11:00)));
    }

    #[test]
    fn test_no_slot_overlaps_any_occupied_interval() {
        let occupied = vec![
            booked(datetime!(2026-09-07 09:30), 30),
            booked(datetime!(2026-09-07 12:00), 90),
            booked(datetime!(2026-09-07 16:15), 45),
        ];
        let slots = find_slots(&window_9_to_5(), &occupied, 45);

        for slot in &slots {
            for interval in &occupied {
                assert!(
                    !interval.overlaps(slot.start, slot.end),
                    "slot {}..{} overlaps occupied {}..{}",
                    slot.start,
                    slot.end,
                    interval.start,
                    interval.end
                );
            }
        }
    }

    #[test]
    fn test_output_sorted_ascending() {
        let occupied = vec![booked(datetime!(2026-09-07 13:00), 30)];
        let slots = find_slots(&window_9_to_5(), &occupied, 30);
        for pair in slots.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let occupied = vec![booked(datetime!(2026-09-07 10:00), 60)];
        let first = find_slots(&window_9_to_5(), &occupied, 30);
        let second = find_slots(&window_9_to_5(), &occupied, 30);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duration_longer_than_window_yields_nothing() {
        let window = ScheduleWindow {
            employee_id: 1,
            start: datetime!(2026-09-07 09:00),
            end: datetime!(2026-09-07 10:00),
        };
        assert!(find_slots(&window, &[], 90).is_empty());
    }

    #[test]
    fn test_fully_booked_day_yields_nothing() {
        let occupied = vec![booked(datetime!(2026-09-07 09:00), 8 * 60)];
        assert!(find_slots(&window_9_to_5(), &occupied, 30).is_empty());
    }

    #[test]
    fn test_back_to_back_bookings_leave_touching_gaps_free() {
        // [10:00, 10:30) and [11:00, 11:30) occupied; the 10:30-11:00
        // gap is exactly one 30-minute slot and must survive.
        let occupied = vec![
            booked(datetime!(2026-09-07 10:00), 30),
            booked(datetime!(2026-09-07 11:00), 30),
        ];
        let slots = find_slots(&window_9_to_5(), &occupied, 30);
        assert!(slots.iter().any(|s| s.start == datetime!(2026-09-07 10:30)));
    }

    #[test]
    fn test_merge_orders_across_employees_and_keeps_tie_order() {
        let date = date!(2026 - 09 - 07);
        let early = ScheduleWindow {
            employee_id: 7,
            start: time::PrimitiveDateTime::new(date, time::macros::time!(09:00)),
            end: time::PrimitiveDateTime::new(date, time::macros::time!(10:00)),
        };
        let late = ScheduleWindow {
            employee_id: 3,
            start: time::PrimitiveDateTime::new(date, time::macros::time!(09:00)),
            end: time::PrimitiveDateTime::new(date, time::macros::time!(10:00)),
        };

        let merged = merge_by_start(vec![
            find_slots(&early, &[], 30),
            find_slots(&late, &[], 30),
        ]);

        for pair in merged.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
        // Ties retain discovery order: employee 7 was discovered first.
        let ties: Vec<i64> = merged
            .iter()
            .filter(|s| s.start == datetime!(2026-09-07 09:00))
            .map(|s| s.employee_id)
            .collect();
        assert_eq!(ties, vec![7, 3]);
    }
}
