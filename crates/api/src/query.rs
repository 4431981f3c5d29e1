//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Flight search parameters (`?depart_date=&departure=&arrival=`).
///
/// Kept as raw strings so a malformed `depart_date` is reported by
/// [`airport_core::flight_search::FlightSearch::parse`] with a clear message
/// instead of a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct FlightSearchParams {
    pub depart_date: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
}

/// Page-number pagination parameters (`?page=&page_size=`).
///
/// Values are clamped by [`airport_core::pagination::PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
