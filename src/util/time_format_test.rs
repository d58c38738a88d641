use super::*;
use time::Duration;
use time::macros::datetime;

fn now() -> OffsetDateTime {
    datetime!(2024-06-15 12:00:00 UTC)
}

// =============================================================
// Relative buckets
// =============================================================

#[test]
fn thirty_seconds_ago_is_just_now() {
    let created = now() - Duration::seconds(30);
    assert_eq!(format_relative(created, now(), DateStyle::Short), "Just now");
}

#[test]
fn five_minutes_ago_is_minutes() {
    let created = now() - Duration::minutes(5);
    assert_eq!(format_relative(created, now(), DateStyle::Short), "5m ago");
}

#[test]
fn fifty_nine_minutes_stays_in_minutes() {
    let created = now() - Duration::seconds(59 * 60 + 59);
    assert_eq!(format_relative(created, now(), DateStyle::Short), "59m ago");
}

#[test]
fn three_hours_ago_is_hours() {
    let created = now() - Duration::hours(3);
    assert_eq!(format_relative(created, now(), DateStyle::Short), "3h ago");
}

#[test]
fn future_timestamps_read_as_just_now() {
    let created = now() + Duration::minutes(2);
    assert_eq!(format_relative(created, now(), DateStyle::Short), "Just now");
}

// =============================================================
// Absolute dates
// =============================================================

#[test]
fn two_days_ago_is_short_date_without_year() {
    let created = now() - Duration::days(2);
    assert_eq!(format_relative(created, now(), DateStyle::Short), "Jun 13");
}

#[test]
fn previous_year_includes_year() {
    let created = datetime!(2023-01-05 08:00:00 UTC);
    assert_eq!(format_relative(created, now(), DateStyle::Short), "Jan 5, 2023");
}

#[test]
fn per_post_style_shows_date_and_time() {
    let created = datetime!(2024-01-05 15:04:00 UTC);
    assert_eq!(format_relative(created, now(), DateStyle::DateTime), "Jan 5, 2024, 03:04 PM");
}

#[test]
fn absolute_dates_render_in_nows_offset() {
    let now = datetime!(2024-06-15 12:00:00 +2);
    let created = datetime!(2024-06-10 23:30:00 UTC);
    assert_eq!(format_relative(created, now, DateStyle::Short), "Jun 11");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_backend_timestamp_with_offset_and_micros() {
    let ts = parse_timestamp("2024-03-01T10:00:00.123456+00:00").unwrap();
    assert_eq!(ts.hour(), 10);
    assert_eq!(ts.offset(), UtcOffset::UTC);
}

#[test]
fn parses_naive_timestamp_as_utc() {
    let ts = parse_timestamp("2024-03-01T10:00:00.5").unwrap();
    assert_eq!(ts.offset(), UtcOffset::UTC);
    assert_eq!(ts.minute(), 0);
}

#[test]
fn display_falls_back_to_raw_text() {
    assert_eq!(display_relative("yesterday-ish", now(), DateStyle::Short), "yesterday-ish");
    assert_eq!(display_date_time("nope", UtcOffset::UTC), "nope");
}

#[test]
fn display_date_time_formats_post_header() {
    assert_eq!(display_date_time("2024-01-05T09:30:00Z", UtcOffset::UTC), "Jan 5, 2024, 09:30 AM");
}
