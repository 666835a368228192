//! Wall-clock formatting in IANA time zones.
//!
//! Timestamps are rendered the way an `en-US` locale renders the `full`
//! date style combined with the `long` time style:
//!
//! ```text
//! Friday, March 15, 2024 at 10:30:00 AM EDT
//! Friday, March 15, 2024 at 11:30:00 PM GMT+9
//! ```
//!
//! Formatting functions take the instant explicitly so callers decide when
//! the clock is read; the `*_now` helpers read it once per call.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::TimeError;

/// Zone used when a caller does not name one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Full date and long time, without the zone label.
const LONG_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M:%S %p";

/// Zone names `en-US` spells out, with the UTC offset in hours they denote.
const US_ZONE_NAMES: &[(&str, i32)] = &[
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
    ("AKST", -9),
    ("AKDT", -8),
    ("HST", -10),
    ("HDT", -9),
];

/// Resolve an IANA zone identifier such as `Europe/London`.
///
/// Identifiers match regardless of case; the empty string is never a zone.
pub fn resolve_timezone(name: &str) -> Result<Tz, TimeError> {
    Tz::from_str_insensitive(name).map_err(|_| TimeError::InvalidTimezone(name.to_string()))
}

/// `GMT+9`, `GMT+5:30`, `GMT-5`.
fn gmt_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    match (minutes / 60, minutes % 60) {
        (hours, 0) => format!("GMT{sign}{hours}"),
        (hours, mins) => format!("GMT{sign}{hours}:{mins:02}"),
    }
}

/// Zone label of a local time as `en-US` prints it in the long time style.
fn zone_label(local: &DateTime<Tz>) -> String {
    let abbreviation = local.format("%Z").to_string();
    let offset = local.offset().fix().local_minus_utc();

    // CST is also China Standard Time; only trust the name on its US offset.
    let us_name = US_ZONE_NAMES
        .iter()
        .any(|&(name, hours)| name == abbreviation && hours * 3600 == offset);

    if us_name {
        abbreviation
    } else if offset == 0 {
        if abbreviation == "UTC" { abbreviation } else { "GMT".to_string() }
    } else {
        gmt_offset(offset)
    }
}

/// Format `instant` as a long-form date-time in `tz`.
#[must_use]
pub fn format_long(instant: DateTime<Utc>, tz: Tz) -> String {
    let local = instant.with_timezone(&tz);
    format!("{} {}", local.format(LONG_FORMAT), zone_label(&local))
}

/// Format `instant` in the zone named `timezone`.
pub fn format_in(instant: DateTime<Utc>, timezone: &str) -> Result<String, TimeError> {
    resolve_timezone(timezone).map(|tz| format_long(instant, tz))
}

/// Format `instant` in UTC.
#[must_use]
pub fn format_utc(instant: DateTime<Utc>) -> String {
    format_long(instant, Tz::UTC)
}

/// A clock reading reported by the time lookup route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReading {
    /// Zone identifier as requested.
    pub timezone: String,
    /// Long-form formatted time in that zone.
    pub time: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl TimeReading {
    /// Take a reading of `instant` in the zone named `timezone`.
    pub fn at(instant: DateTime<Utc>, timezone: &str) -> Result<Self, TimeError> {
        let time = format_in(instant, timezone)?;
        Ok(Self {
            timezone: timezone.to_string(),
            time,
            timestamp: instant.timestamp_millis(),
        })
    }

    /// Take a reading of the current instant.
    pub fn now(timezone: &str) -> Result<Self, TimeError> {
        Self::at(Utc::now(), timezone)
    }
}
