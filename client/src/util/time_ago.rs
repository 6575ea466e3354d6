//! Relative timestamp labels ("3 minutes ago").
//!
//! Buckets follow the familiar social-feed convention: seconds under a
//! minute, then minutes, hours, days, weeks (7 days), months (30 days) and
//! years (365 days). Instants in the future read "... from now".

#[cfg(test)]
#[path = "time_ago_test.rs"]
mod time_ago_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Current wall-clock instant (UTC).
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Seconds elapsed between `created_at` (RFC 3339) and `now`.
///
/// Negative when `created_at` lies in the future; `None` when unparsable.
pub fn elapsed_seconds(created_at: &str, now: OffsetDateTime) -> Option<i64> {
    let then = OffsetDateTime::parse(created_at, &Rfc3339).ok()?;
    Some((now - then).whole_seconds())
}

/// Render an elapsed duration as a relative label.
pub fn elapsed_label(seconds: i64) -> String {
    let suffix = if seconds < 0 { "from now" } else { "ago" };
    let abs = seconds.unsigned_abs();
    let (value, unit) = if abs < MINUTE {
        (abs, "second")
    } else if abs < HOUR {
        (abs / MINUTE, "minute")
    } else if abs < DAY {
        (abs / HOUR, "hour")
    } else if abs < WEEK {
        (abs / DAY, "day")
    } else if abs < MONTH {
        (abs / WEEK, "week")
    } else if abs < YEAR {
        (abs / MONTH, "month")
    } else {
        (abs / YEAR, "year")
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} {suffix}")
}

/// Relative label for an RFC 3339 timestamp; unparsable input is echoed back.
pub fn label(created_at: &str, now: OffsetDateTime) -> String {
    elapsed_seconds(created_at, now).map_or_else(|| created_at.to_owned(), elapsed_label)
}
