use super::*;
use time::macros::{datetime, offset};

#[test]
fn parse_local_accepts_minutes_and_seconds_forms() {
    assert_eq!(parse_local("2025-03-14T18:30"), Some(datetime!(2025-03-14 18:30)));
    assert_eq!(parse_local("2025-03-14T18:30:45"), Some(datetime!(2025-03-14 18:30:45)));
}

#[test]
fn parse_local_rejects_empty_and_garbage() {
    assert_eq!(parse_local(""), None);
    assert_eq!(parse_local("tomorrow"), None);
    assert_eq!(parse_local("2025-13-01T10:00"), None);
}

#[test]
fn to_utc_iso_shifts_by_offset() {
    let local = datetime!(2025-03-14 18:30);
    assert_eq!(to_utc_iso(local, offset!(+5:30)).as_deref(), Some("2025-03-14T13:00:00.000Z"));
}

#[test]
fn to_utc_iso_crosses_midnight() {
    let local = datetime!(2025-01-01 01:15);
    assert_eq!(to_utc_iso(local, offset!(+3)).as_deref(), Some("2024-12-31T22:15:00.000Z"));
}

#[test]
fn local_input_to_utc_iso_outside_browser_is_utc() {
    assert_eq!(local_input_to_utc_iso("2025-06-01T09:05").as_deref(), Some("2025-06-01T09:05:00.000Z"));
    assert_eq!(local_input_to_utc_iso("not a date"), None);
}

#[test]
fn display_timestamp_formats_rfc3339() {
    assert_eq!(display_timestamp("2025-06-01T09:05:00.000Z"), "2025-06-01 09:05 UTC");
    assert_eq!(display_timestamp("soon"), "soon");
}
