// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service catalog query operations.

use crate::data_models::ServiceRow;
use crate::diesel_schema::services;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use slotbook_domain::Service;

backend_fn! {

/// Fetch a service by ID, `None` if it does not exist.
///
/// Active/inactive filtering is the engine's concern; this query
/// returns the row either way so the engine can distinguish "unknown
/// service" from "retired service" in its own error reporting.
///
/// # Backend-agnostic
///
/// This function uses Diesel DSL exclusively.
pub fn get_service(
    conn: &mut _,
    service_id: i64,
) -> Result<Option<Service>, PersistenceError> {
    services::table
        .filter(services::service_id.eq(service_id))
        .first::<ServiceRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_service: {e}")))?
        .map(ServiceRow::into_domain)
        .transpose()
}

}
