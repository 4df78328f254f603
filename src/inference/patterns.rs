//! Shape recognizers for string values

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// Unanchored: any "<number>, <number>" run inside the string counts.
static COORDINATE_PAIR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([+-]?\d+(\.\d+)?)\s*,\s*([+-]?\d+(\.\d+)?)").unwrap());

// Extension match is case-sensitive.
static IMAGE_EXTENSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(jpg|jpeg|png|gif)$").unwrap());

static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

static YEAR_MONTH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%a, %d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Check for a `<number>,<number>` coordinate pair anywhere in the string
pub fn is_coordinate_pair(value: &str) -> bool {
    COORDINATE_PAIR_REGEX.is_match(value)
}

/// Check whether the string ends in `.jpg`, `.jpeg`, `.png` or `.gif`
pub fn is_image_path(value: &str) -> bool {
    IMAGE_EXTENSION_REGEX.is_match(value)
}

/// Check whether the string denotes a valid calendar date or timestamp.
///
/// Accepts RFC 3339, RFC 2822, a bare four-digit year, `YYYY-MM` and a
/// fixed list of common date and date-time layouts. Impossible dates such
/// as `2021-02-30` are rejected.
pub fn is_calendar_date(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    if YEAR_REGEX.is_match(value) {
        return true;
    }

    if YEAR_MONTH_REGEX.is_match(value) {
        return NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").is_ok();
    }

    if DateTime::parse_from_rfc3339(value).is_ok() || DateTime::parse_from_rfc2822(value).is_ok()
    {
        return true;
    }

    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_pair() {
        assert!(is_coordinate_pair("12.5, -3.2"));
        assert!(is_coordinate_pair("52.52,13.405"));
        assert!(is_coordinate_pair("+1 ,  2"));
        assert!(!is_coordinate_pair("12.5"));
        assert!(!is_coordinate_pair("red, blue"));
        assert!(!is_coordinate_pair("2020-01-01"));
    }

    #[test]
    fn test_image_path() {
        assert!(is_image_path("photo.png"));
        assert!(is_image_path("https://cdn.example.com/a/b.jpeg"));
        assert!(is_image_path("x.gif"));
        assert!(!is_image_path("photo.PNG"));
        assert!(!is_image_path("photo.png.txt"));
        assert!(!is_image_path("png"));
    }

    #[test]
    fn test_calendar_dates() {
        assert!(is_calendar_date("2020-01-01"));
        assert!(is_calendar_date("2024-01-15T10:30:00Z"));
        assert!(is_calendar_date("2024-01-15T10:30:00+05:00"));
        assert!(is_calendar_date("2024-01-15 10:30:00"));
        assert!(is_calendar_date("2024/01/15"));
        assert!(is_calendar_date("01/15/2024"));
        assert!(is_calendar_date("January 15, 2024"));
        assert!(is_calendar_date("Mon, 15 Jan 2024 10:30:00 +0000"));
        assert!(is_calendar_date("2024"));
        assert!(is_calendar_date("2024-03"));
    }

    #[test]
    fn test_not_calendar_dates() {
        assert!(!is_calendar_date(""));
        assert!(!is_calendar_date("hello"));
        assert!(!is_calendar_date("red, blue"));
        assert!(!is_calendar_date("2021-02-30"));
        assert!(!is_calendar_date("2024-13"));
        assert!(!is_calendar_date("12345"));
    }
}
