// ABOUTME: Export file output and summary statistics for generated bundles
// ABOUTME: Writes pretty-printed UTF-8 JSON and reports per-collection record counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use fitness_demo_core::{DemoDataError, DemoResult, ExportBundle};
use tracing::debug;

/// Serialize a bundle as two-space indented JSON and write it to `path`
///
/// Non-ASCII text such as the Chinese template names is written as raw
/// UTF-8, not as `\u` escapes. An existing file is overwritten.
///
/// # Errors
///
/// Returns `Json` if serialization fails and `Io` if the file cannot be written
pub fn write_bundle(path: impl AsRef<Path>, bundle: &ExportBundle) -> DemoResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(bundle)?;
    fs::write(path, &json).map_err(|e| DemoDataError::io(path, e))?;
    debug!(path = %path.display(), bytes = json.len(), "export written");
    Ok(())
}

/// Record counts of a generated bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStatistics {
    /// Weight records
    pub weight_records: usize,
    /// Body fat records
    pub body_fat_records: usize,
    /// Days with at least one workout
    pub workout_days: usize,
    /// Workouts across all days
    pub workout_entries: usize,
    /// Nutrition days
    pub nutrition_days: usize,
    /// First and last nutrition date, if any
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl DatasetStatistics {
    /// Count the collections of a bundle
    #[must_use]
    pub fn from_bundle(bundle: &ExportBundle) -> Self {
        let data = &bundle.data;
        let date_range = data
            .nutrition
            .first()
            .zip(data.nutrition.last())
            .map(|(first, last)| (first.date, last.date));

        Self {
            weight_records: data.weights.len(),
            body_fat_records: data.body_fat.len(),
            workout_days: data.workouts.len(),
            workout_entries: data.workouts.values().map(Vec::len).sum(),
            nutrition_days: data.nutrition.len(),
            date_range,
        }
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "weight records:   {}", self.weight_records)?;
        writeln!(f, "body fat records: {}", self.body_fat_records)?;
        writeln!(
            f,
            "workout days:     {} ({} workouts)",
            self.workout_days, self.workout_entries
        )?;
        write!(f, "nutrition days:   {}", self.nutrition_days)?;
        if let Some((first, last)) = self.date_range {
            write!(f, "\ndate range:       {first} to {last}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use fitness_demo_core::{ExportData, Language, UserSettings};
    use std::collections::BTreeMap;

    fn empty_bundle() -> ExportBundle {
        let export_date =
            NaiveDateTime::parse_from_str("2025-03-01 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        ExportBundle::new(
            export_date,
            ExportData {
                weights: Vec::new(),
                body_fat: Vec::new(),
                workouts: BTreeMap::new(),
                nutrition: Vec::new(),
                user_settings: UserSettings::demo(Language::Chinese),
            },
        )
    }

    #[test]
    fn test_statistics_of_empty_bundle() {
        let stats = DatasetStatistics::from_bundle(&empty_bundle());
        assert_eq!(stats.weight_records, 0);
        assert_eq!(stats.workout_entries, 0);
        assert!(stats.date_range.is_none());
        assert!(!stats.to_string().contains("date range"));
    }

    #[test]
    fn test_write_bundle_keeps_utf8_and_indentation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        write_bundle(&path, &empty_bundle()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("演示用户"));
        assert!(contents.contains("\n  \"version\": \"1.0\""));
        assert!(contents.contains("\"exportDate\": \"2025-03-01T09:30:00.000000\""));
    }

    #[test]
    fn test_write_bundle_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("export.json");
        let err = write_bundle(&path, &empty_bundle()).unwrap_err();
        assert!(matches!(err, DemoDataError::Io { .. }));
    }
}
