//! String to date coercion for `date` fields
//!
//! The frontmatter parser leaves dates as strings; turning them into dates
//! is the schema's job. Accepted forms:
//! - RFC 3339 (`2024-05-01T10:00:00Z`, `2024-05-01T10:00:00+02:00`)
//! - RFC 2822 (`Wed, 01 May 2024 10:00:00 +0000`)
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS` and fractional seconds,
//!   with `T` or a space as separator; these are read as UTC

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a frontmatter string into a UTC timestamp
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.and_utc())
}
