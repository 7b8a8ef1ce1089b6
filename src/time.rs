//! Timestamps, clock-style durations and calendar helpers.

use chrono::{Local, NaiveDateTime};
use tracing::warn;

use crate::error::{Result, UtilError};

/// `YYYYMMDD_HHMMSS`, sortable and safe in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Formats `at` with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time as a [`TIMESTAMP_FORMAT`] string.
pub fn timestamp_now() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Parses a [`TIMESTAMP_FORMAT`] string.
///
/// # Errors
/// Returns `Decode` if `text` does not match the format.
///
/// # Examples
/// ```
/// use u_toolkit::time::{format_timestamp, parse_timestamp};
/// let at = parse_timestamp("20240229_235959").unwrap();
/// assert_eq!(format_timestamp(at), "20240229_235959");
/// ```
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| UtilError::Decode(format!("timestamp {text:?}: {e}")))
}

/// Splits whole seconds into hours, minutes and seconds.
pub fn seconds_to_hms(total_seconds: u64) -> (u64, u64, u64) {
    (
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60,
    )
}

/// Clock-style duration: `MM:SS` under an hour, `HH:MM:SS` otherwise.
/// Fractional seconds are dropped.
///
/// Negative or NaN input is logged and treated as zero.
///
/// # Examples
/// ```
/// use u_toolkit::time::format_duration;
/// assert_eq!(format_duration(75.9), "01:15");
/// assert_eq!(format_duration(3725.0), "01:02:05");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let seconds = if seconds >= 0.0 {
        seconds
    } else {
        warn!(seconds, "negative duration clamped to zero");
        0.0
    };
    // `as` saturates, so +inf lands on u64::MAX
    let (h, m, s) = seconds_to_hms(seconds.floor() as u64);
    if h == 0 {
        format!("{m:02}:{s:02}")
    } else {
        format!("{h:02}:{m:02}:{s:02}")
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
///
/// # Errors
/// Returns `InvalidArgument` if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(UtilError::invalid(
            "month",
            format!("must be in 1..=12, got {month}"),
        )),
    }
}
