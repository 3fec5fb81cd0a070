//! Timestamp formatting and parsing
//!
//! Start times are naive local timestamps. Everything that leaves the core
//! carries them pre-formatted as `YYYY-MM-DD HH:MM:SS`.

use chrono::{Local, NaiveDateTime};

/// Display and storage format for show start times
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats accepted from submissions, in order of preference
const INPUT_FORMATS: &[&str] = &[
    TIMESTAMP_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Format a start time as `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a submitted start time
///
/// Returns `None` when the value matches none of the accepted formats.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Capture the reference time for one operation
///
/// Call this once per request and thread the value through every
/// partition, count and projection of that request.
pub fn reference_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn formats_zero_padded_24_hour() {
        assert_eq!(format_timestamp(&sample()), "2025-03-07 09:05:03");

        let evening = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_timestamp(&evening), "2025-12-31 23:59:59");
    }

    #[test]
    fn parses_storage_format() {
        assert_eq!(parse_timestamp("2025-03-07 09:05:03"), Some(sample()));
    }

    #[test]
    fn parses_datetime_local_inputs() {
        assert_eq!(parse_timestamp("2025-03-07T09:05:03"), Some(sample()));

        let minutes = parse_timestamp("2025-03-07T09:05").unwrap();
        assert_eq!(format_timestamp(&minutes), "2025-03-07 09:05:00");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("next tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("2025-13-01 00:00:00"), None);
    }
}
