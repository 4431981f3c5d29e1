//! Flight search parameter parsing.
//!
//! Raw query-string values are turned into a [`FlightSearch`] before any
//! query runs, so malformed input fails loudly instead of matching nothing.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Accepted `depart_date` format (`2024-03-10`).
pub const DEPART_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsed, validated flight search filters. All filters are optional and
/// combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightSearch {
    /// Calendar date (UTC) on which the flight departs.
    pub depart_date: Option<NaiveDate>,
    /// Case-insensitive substring of the source airport name.
    pub departure: Option<String>,
    /// Case-insensitive substring of the destination airport name.
    pub arrival: Option<String>,
}

impl FlightSearch {
    /// Build a search from raw query values. Empty values count as absent.
    pub fn parse(
        depart_date: Option<&str>,
        departure: Option<&str>,
        arrival: Option<&str>,
    ) -> Result<Self, CoreError> {
        let depart_date = non_empty(depart_date)
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DEPART_DATE_FORMAT).map_err(|_| {
                    CoreError::Validation(format!(
                        "depart_date '{raw}' is not a valid date, expected YYYY-MM-DD"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            depart_date,
            departure: non_empty(departure).map(str::to_string),
            arrival: non_empty(arrival).map(str::to_string),
        })
    }

    /// Half-open `[start, end)` UTC window covering `depart_date`, if set.
    pub fn departure_window(&self) -> Option<(Timestamp, Timestamp)> {
        self.depart_date.map(day_bounds)
    }

    /// `ILIKE` pattern for the source airport name, if set.
    pub fn departure_pattern(&self) -> Option<String> {
        self.departure.as_deref().map(contains_pattern)
    }

    /// `ILIKE` pattern for the destination airport name, if set.
    pub fn arrival_pattern(&self) -> Option<String> {
        self.arrival.as_deref().map(contains_pattern)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// UTC midnight of `date` and of the following day.
pub fn day_bounds(date: NaiveDate) -> (Timestamp, Timestamp) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    (start, start + chrono::Duration::days(1))
}

/// Wrap `needle` as a substring `LIKE` pattern, escaping `%`, `_` and `\`.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_filters_absent() {
        let search = FlightSearch::parse(None, None, None).unwrap();
        assert_eq!(search, FlightSearch::default());
        assert!(search.departure_window().is_none());
    }

    #[test]
    fn blank_values_are_ignored() {
        let search = FlightSearch::parse(Some(""), Some("  "), Some("")).unwrap();
        assert_eq!(search, FlightSearch::default());
    }

    #[test]
    fn parses_date_and_substrings() {
        let search = FlightSearch::parse(Some("2024-03-10"), Some("london"), Some("Paris")).unwrap();
        assert_eq!(
            search.depart_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
        assert_eq!(search.departure_pattern().as_deref(), Some("%london%"));
        assert_eq!(search.arrival_pattern().as_deref(), Some("%Paris%"));
    }

    #[test]
    fn malformed_date_is_a_validation_error() {
        assert_matches!(
            FlightSearch::parse(Some("10/03/2024"), None, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            FlightSearch::parse(Some("2024-02-30"), None, None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn window_covers_one_utc_day() {
        let search = FlightSearch::parse(Some("2024-03-10"), None, None).unwrap();
        let (start, end) = search.departure_window().unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(contains_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }
}
