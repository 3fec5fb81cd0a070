//! Column encodings shared by the entity slices

use chrono::NaiveDateTime;
use encore_core::time::{format_timestamp, TIMESTAMP_FORMAT};
use std::collections::BTreeSet;

/// Genres are stored as a JSON array in a TEXT column
pub(crate) fn encode_genres(genres: &BTreeSet<String>) -> Result<String, serde_json::Error> {
    serde_json::to_string(genres)
}

pub(crate) fn decode_genres(raw: &str) -> Result<BTreeSet<String>, sqlx::Error> {
    serde_json::from_str(raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

pub(crate) fn encode_start_time(value: &NaiveDateTime) -> String {
    format_timestamp(value)
}

pub(crate) fn decode_start_time(raw: &str) -> Result<NaiveDateTime, sqlx::Error> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_decode_sorted_and_unique() {
        let genres = decode_genres(r#"["Jazz","Blues","Jazz"]"#).unwrap();
        assert_eq!(encode_genres(&genres).unwrap(), r#"["Blues","Jazz"]"#);
    }

    #[test]
    fn malformed_genres_are_a_decode_error() {
        assert!(matches!(decode_genres("Jazz"), Err(sqlx::Error::Decode(_))));
    }

    #[test]
    fn start_time_uses_display_format() {
        let parsed = decode_start_time("2035-04-01 20:00:00").unwrap();
        assert_eq!(encode_start_time(&parsed), "2035-04-01 20:00:00");
        assert!(decode_start_time("2035-04-01T20:00:00").is_err());
    }
}
