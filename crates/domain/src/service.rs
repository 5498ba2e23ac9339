// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A bookable service.
///
/// The duration drives slot-length computation; prices are stored as
/// integer cents to avoid floating-point money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the service has not been persisted yet.
    pub service_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Appointment length in minutes.
    pub duration_minutes: u16,
    /// Price in cents.
    pub price_cents: i64,
    /// Inactive services are rejected at booking and availability time.
    pub is_active: bool,
}

impl Service {
    /// Creates a new `Service` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the duration is zero, or
    /// the price is negative.
    pub fn new(name: &str, duration_minutes: u16, price_cents: i64) -> Result<Self, DomainError> {
        crate::types::validate_nonempty("service name", name)?;
        if duration_minutes == 0 {
            return Err(DomainError::InvalidServiceDuration { minutes: 0 });
        }
        if price_cents < 0 {
            return Err(DomainError::InvalidServicePrice { cents: price_cents });
        }
        Ok(Self {
            service_id: None,
            name: name.to_string(),
            description: None,
            duration_minutes,
            price_cents,
            is_active: true,
        })
    }

    /// Creates a `Service` with an existing persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is invalid.
    pub fn with_id(
        service_id: i64,
        name: &str,
        description: Option<String>,
        duration_minutes: u16,
        price_cents: i64,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let mut service = Self::new(name, duration_minutes, price_cents)?;
        service.service_id = Some(service_id);
        service.description = description;
        service.is_active = is_active;
        Ok(service)
    }
}
