//! Format the time elapsed since a given instant.
//!
//! The rendering is `P<years>Y<days>D<hours>H<minutes>M<seconds>.<tenth>S`.  It looks like an
//! ISO 8601 duration but it is not one: `days` is the *total* number of days and `years` is
//! just `days / 365`, so both overlap.  Existing clients parse this exact string, keep it.
//!

use chrono::{DateTime, Duration, Utc};

const MS_PER_DECISECOND: i64 = 100;
/// Added before truncating, an exact half tenth stays down (90.05s is 30.0S).
const ROUNDING: i64 = MS_PER_DECISECOND / 2 - 1;
const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time elapsed since `since`, up to now.
///
pub fn format_elapsed(since: DateTime<Utc>) -> String {
    format_between(since, Utc::now())
}

/// Time elapsed between `since` and `until`.
///
pub fn format_between(since: DateTime<Utc>, until: DateTime<Utc>) -> String {
    format_duration(until - since)
}

/// Render a duration, rounded to the nearest tenth of a second.
///
/// This is not plain round-half-up: the duration is truncated to whole milliseconds and an
/// exact half tenth rounds down, so 90.05s renders as `30.0S` while 90.051s gives `30.1S`.
/// Sub-millisecond parts are ignored (50.5ms renders `0.0S`).
///
/// A negative duration (clock going backwards) is rendered as its absolute value.
///
pub fn format_duration(elapsed: Duration) -> String {
    let mut ms = elapsed.num_milliseconds().saturating_abs();
    ms = ms.saturating_add(ROUNDING);

    let days = ms / MS_PER_DAY;
    ms %= MS_PER_DAY;

    let hours = ms / MS_PER_HOUR;
    ms %= MS_PER_HOUR;

    let minutes = ms / MS_PER_MINUTE;
    ms %= MS_PER_MINUTE;

    let seconds = ms / MS_PER_SECOND;
    ms %= MS_PER_SECOND;

    let tenths = ms / MS_PER_DECISECOND;
    let years = days / 365;

    format!("P{years}Y{days}D{hours}H{minutes}M{seconds}.{tenths}S")
}
