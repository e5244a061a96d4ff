use crate::error::ListingError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a content date: RFC 3339 (`2024-01-02T08:00:00.000Z`), a local
/// date-time without offset, or a bare `YYYY-MM-DD` date.
///
/// Offsets are normalized to UTC.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, ListingError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ListingError::InvalidDate(value.to_string()))
}

/// Formats a date with a long month name in the conventions of `locale`.
///
/// English locales give `January 2, 2024`, Chinese locales `2024年1月2日`.
/// Any other locale falls back to ISO `2024-01-02`.
pub fn format_date(date: &NaiveDateTime, locale: &str) -> String {
    let locale = locale.to_ascii_lowercase();
    let pattern = if locale.starts_with("en") {
        "%B %-d, %Y"
    } else if locale.starts_with("zh") {
        "%Y年%-m月%-d日"
    } else {
        "%Y-%m-%d"
    };
    date.format(pattern).to_string()
}
