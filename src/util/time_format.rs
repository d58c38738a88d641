//! Timestamp parsing and display formatting.
//!
//! All formatting takes `now` explicitly so it is deterministic under test;
//! only [`now`] touches the clock. Absolute dates render in `now`'s offset,
//! which in the browser is the user's local offset.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// How a timestamp older than a day is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStyle {
    /// "Jan 5", or "Jan 5, 2023" outside the current year.
    Short,
    /// "Jan 5, 2024, 03:04 PM".
    DateTime,
}

/// Parse a backend timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(raw, naive).ok().map(PrimitiveDateTime::assume_utc)
}

/// Relative time for recent timestamps, absolute date otherwise.
pub fn format_relative(created: OffsetDateTime, now: OffsetDateTime, style: DateStyle) -> String {
    let elapsed = now - created;
    let hours = elapsed.whole_hours();
    if hours < 1 {
        let minutes = elapsed.whole_minutes();
        if minutes < 1 { "Just now".to_owned() } else { format!("{minutes}m ago") }
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        let local = created.to_offset(now.offset());
        match style {
            DateStyle::Short => format_short_date(local, now.year()),
            DateStyle::DateTime => format_date_time(local),
        }
    }
}

/// "Jan 5", with ", 2023" appended when the year differs from `current_year`.
pub fn format_short_date(date: OffsetDateTime, current_year: i32) -> String {
    let month_day = date
        .format(format_description!("[month repr:short] [day padding:none]"))
        .unwrap_or_default();
    if date.year() == current_year { month_day } else { format!("{month_day}, {}", date.year()) }
}

/// "Jan 5, 2024, 03:04 PM".
pub fn format_date_time(date: OffsetDateTime) -> String {
    date.format(format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
    ))
    .unwrap_or_default()
}

/// Render a raw backend timestamp, falling back to the raw text if it does
/// not parse.
pub fn display_relative(raw: &str, now: OffsetDateTime, style: DateStyle) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| format_relative(ts, now, style))
}

pub fn display_date_time(raw: &str, offset: UtcOffset) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| format_date_time(ts.to_offset(offset)))
}

/// The browser's current UTC offset; UTC on native builds.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "csr")]
    {
        // getTimezoneOffset is minutes *behind* UTC.
        let minutes = js_sys::Date::new_0().get_timezone_offset();
        #[allow(clippy::cast_possible_truncation)]
        let seconds = (-minutes * 60.0).round() as i32;
        UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "csr"))]
    {
        UtcOffset::UTC
    }
}

/// Current time in the local offset.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(local_offset())
}
