//! Time and date calculation utilities.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::Error;

/// Calculates the inclusive bounds of the UTC calendar day containing `ts`.
///
/// Logbook entries typically record only a date, not a time of day, so the
/// verification engine buckets corpus departures by calendar day rather than
/// requiring exact timestamp alignment. The upper bound is 23:59:59.999 to
/// stay inclusive under a `BETWEEN`-style comparison.
///
/// # Arguments
/// - `ts` - Reference UTC timestamp whose calendar day is wanted
///
/// # Returns
/// - `Ok((start, end))` - Midnight and the last representable millisecond of the day
/// - `Err(Error::ParseError)` - Failed to construct either bound
pub fn utc_day_bounds(ts: DateTime<Utc>) -> Result<(NaiveDateTime, NaiveDateTime), Error> {
    let date = ts.date_naive();

    let start = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        Error::ParseError("Failed to construct start-of-day timestamp for day bucket".to_string())
    })?;
    let end = date.and_hms_milli_opt(23, 59, 59, 999).ok_or_else(|| {
        Error::ParseError("Failed to construct end-of-day timestamp for day bucket".to_string())
    })?;

    Ok((start, end))
}
