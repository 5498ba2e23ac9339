// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability queries: the cache in front of the slot finder.

use crate::BookingEngine;
use crate::cache::CacheKey;
use crate::error::EngineError;
use crate::lock::SlotLock;
use crate::store::BookingStore;
use slotbook_domain::{Slot, find_slots, merge_by_start};
use time::Date;
use tracing::debug;

impl<S: BookingStore + SlotLock> BookingEngine<S> {
    /// Returns the free slots for a date and service, optionally
    /// restricted to one employee.
    ///
    /// Results are served from the availability cache when a fresh
    /// entry exists; otherwise they are recomputed and cached. Slots
    /// from multiple employees are merged in ascending start order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidService` if the service is missing or inactive,
    /// or a store error if the schedules or bookings cannot be read.
    pub fn available_slots(
        &mut self,
        date: Date,
        service_id: i64,
        employee_id: Option<i64>,
    ) -> Result<Vec<Slot>, EngineError> {
        let key = CacheKey::new(date, employee_id);
        if let Some(slots) = self.cache.get(&key) {
            debug!(%date, service_id, "availability served from cache");
            return Ok(slots.to_vec());
        }

        let slots = fresh_slots(&mut self.store, date, service_id, employee_id)?;
        self.cache.insert(key, slots.clone());
        Ok(slots)
    }
}

/// Recomputes availability directly from the store, bypassing the
/// cache.
///
/// This is the path the committer uses for its mandatory re-check; a
/// cache hit is never a substitute for it.
pub(crate) fn fresh_slots<S: BookingStore>(
    store: &mut S,
    date: Date,
    service_id: i64,
    employee_id: Option<i64>,
) -> Result<Vec<Slot>, EngineError> {
    let service = store
        .get_service(service_id)?
        .filter(|service| service.is_active)
        .ok_or(EngineError::InvalidService { service_id })?;

    let schedules = match employee_id {
        Some(id) => store.schedule_for(id, date)?.into_iter().collect(),
        None => store.schedules_for_day(date)?,
    };

    let mut per_employee = Vec::with_capacity(schedules.len());
    for schedule in &schedules {
        let booked = store.booked_intervals(schedule.employee_id, date)?;
        per_employee.push(find_slots(
            &schedule.window_on(date),
            &booked,
            service.duration_minutes,
        ));
    }
    Ok(merge_by_start(per_employee))
}
