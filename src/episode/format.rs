// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::FormatError;

/// Day, abbreviated month and two-digit year, e.g. "11 mar 21"
const DATE_DISPLAY_FORMAT: &str = "%-d %b %y";

const DATE_LOCALE: Locale = Locale::pt_BR;

/// Timestamps without an offset are read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Format an ISO-8601 publication timestamp for display (pt-BR, UTC)
pub fn format_date(published_at: &str) -> Result<String, FormatError> {
    let date = parse_iso8601(published_at)?;
    Ok(date
        .format_localized(DATE_DISPLAY_FORMAT, DATE_LOCALE)
        .to_string())
}

/// Parse an ISO-8601 timestamp, accepting offset, naive and date-only forms
pub fn parse_iso8601(value: &str) -> Result<DateTime<Utc>, FormatError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| FormatError::InvalidDate {
            date_str: value.to_string(),
            reason: e.to_string(),
        })
}

/// Format a duration in seconds as `HH:MM:SS`.
///
/// Hours are not wrapped, so long recordings render as e.g. `100:00:00`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let secs = seconds % 60;

    format!("{hours:02}:{minutes:02}:{secs:02}")
}
