// ABOUTME: Serde adapter for naive local timestamps in the export format
// ABOUTME: Writes microsecond ISO-8601 and reads any fractional precision back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Use with `#[serde(with = "timestamp")]` on `NaiveDateTime` fields.

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::constants::export::{TIMESTAMP_FORMAT, TIMESTAMP_PARSE_FORMAT};

/// Format a timestamp the way the export writes it
#[must_use]
pub fn format(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Serialize a timestamp as `YYYY-MM-DDTHH:MM:SS.ffffff`
///
/// # Errors
///
/// Returns the serializer's error if writing the string fails
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

/// Deserialize a timestamp with or without fractional seconds
///
/// # Errors
///
/// Returns a custom error if the string is not an ISO-8601 local timestamp
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_PARSE_FORMAT).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_uses_six_fraction_digits() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 9)
            .and_then(|d| d.and_hms_micro_opt(7, 5, 3, 42))
            .unwrap();
        assert_eq!(format(&ts), "2025-03-09T07:05:03.000042");
    }

    #[test]
    fn test_parse_accepts_whole_seconds() {
        let ts = NaiveDateTime::parse_from_str("2025-03-09T07:05:03", TIMESTAMP_PARSE_FORMAT)
            .unwrap();
        assert_eq!(format(&ts), "2025-03-09T07:05:03.000000");
    }
}
