//! Flight schedule rules.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Require `arrival_time` to be strictly after `departure_time`.
pub fn validate_flight_times(
    departure_time: Timestamp,
    arrival_time: Timestamp,
) -> Result<(), CoreError> {
    if arrival_time <= departure_time {
        return Err(CoreError::Validation(format!(
            "arrival_time ({arrival_time}) must be after departure_time ({departure_time})"
        )));
    }
    Ok(())
}
