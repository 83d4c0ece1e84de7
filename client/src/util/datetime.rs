//! Conversions between `<input type="datetime-local">` values and the UTC
//! ISO-8601 timestamps the backend stores.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Parse `YYYY-MM-DDTHH:MM` (seconds optional), as produced by the browser.
#[must_use]
pub fn parse_local(input: &str) -> Option<PrimitiveDateTime> {
    let input = input.trim();
    PrimitiveDateTime::parse(input, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .or_else(|_| PrimitiveDateTime::parse(input, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .ok()
}

/// Render a local wall-clock time at `offset` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn to_utc_iso(local: PrimitiveDateTime, offset: UtcOffset) -> Option<String> {
    local
        .assume_offset(offset)
        .to_offset(UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"))
        .ok()
}

/// The browser's UTC offset in effect at `local`. UTC outside the browser.
#[must_use]
pub fn browser_offset(local: PrimitiveDateTime) -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_with_year_month_day_hr_min(
            u32::try_from(local.year()).unwrap_or_default(),
            i32::from(u8::from(local.month())) - 1,
            i32::from(local.day()),
            i32::from(local.hour()),
            i32::from(local.minute()),
        );
        // getTimezoneOffset is UTC minus local, in minutes.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = date.get_timezone_offset() as i32;
        UtcOffset::from_whole_seconds(-minutes * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = local;
        UtcOffset::UTC
    }
}

/// Convert a `datetime-local` input value to a UTC timestamp in the browser's zone.
#[must_use]
pub fn local_input_to_utc_iso(input: &str) -> Option<String> {
    let local = parse_local(input)?;
    to_utc_iso(local, browser_offset(local))
}

/// Short human form of a backend timestamp; unparseable input is echoed back.
#[must_use]
pub fn display_timestamp(iso: &str) -> String {
    OffsetDateTime::parse(iso, &Rfc3339)
        .ok()
        .and_then(|t| t.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC")).ok())
        .unwrap_or_else(|| iso.to_owned())
}
