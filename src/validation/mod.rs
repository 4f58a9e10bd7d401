// ABOUTME: Import-format validation for exported fitness demo data
// ABOUTME: Pure checks over parsed JSON producing a per-section pass/fail report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Export Validation
//!
//! Checks a JSON document against the shape the mobile app imports:
//!
//! 1. `top-level`: `version`, `exportDate`, and `data` present, and `data`
//!    holds all five collections
//! 2. `weights`, `bodyFat`: lists of dated numeric records
//! 3. `workouts`: map of date to lists of workouts
//! 4. `nutrition`: daily entries whose meal slices each list exactly one food
//! 5. `userSettings`: an object
//!
//! If the top-level section fails nothing else is examined. Every other
//! section is checked independently and reports only its first problem.

mod report;
mod rules;
mod sections;

pub use report::{SectionOutcome, SectionSummary, ValidationReport};
pub use rules::{ExpectedKind, JsonKind, ValidationError};

use std::fmt;
use std::fs;
use std::path::Path;

use fitness_demo_core::{DemoDataError, DemoResult, ExportBundle};
use serde_json::{Map, Value};

/// Part of an export checked as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Envelope fields and the presence of every `data` collection
    TopLevel,
    /// `data.weights`
    Weights,
    /// `data.bodyFat`
    BodyFat,
    /// `data.workouts`
    Workouts,
    /// `data.nutrition`
    Nutrition,
    /// `data.userSettings`
    UserSettings,
}

impl Section {
    /// Collections under `data`, in validation order
    pub const DATA_SECTIONS: [Self; 5] = [
        Self::Weights,
        Self::BodyFat,
        Self::Workouts,
        Self::Nutrition,
        Self::UserSettings,
    ];

    /// JSON key of the section, or `top-level` for the envelope
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TopLevel => "top-level",
            Self::Weights => "weights",
            Self::BodyFat => "bodyFat",
            Self::Workouts => "workouts",
            Self::Nutrition => "nutrition",
            Self::UserSettings => "userSettings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn check_section(
    section: Section,
    data: &Map<String, Value>,
) -> Result<SectionSummary, ValidationError> {
    let check: fn(&Value) -> Result<SectionSummary, ValidationError> = match section {
        Section::TopLevel => return Ok(SectionSummary::Structure),
        Section::Weights => sections::check_weights,
        Section::BodyFat => sections::check_body_fat,
        Section::Workouts => sections::check_workouts,
        Section::Nutrition => sections::check_nutrition,
        Section::UserSettings => sections::check_user_settings,
    };
    data.get(section.key()).map_or_else(
        || {
            Err(ValidationError::MissingField {
                section,
                path: "data".to_owned(),
                field: section.key(),
            })
        },
        check,
    )
}

/// Validate a parsed export document
#[must_use]
pub fn validate_export(root: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let data = match sections::check_top_level(root) {
        Ok(data) => {
            report.push(Section::TopLevel, Ok(SectionSummary::Structure));
            data
        }
        Err(err) => {
            report.push(Section::TopLevel, Err(err));
            return report;
        }
    };

    for section in Section::DATA_SECTIONS {
        report.push(section, check_section(section, data));
    }
    report
}

/// Validate an in-memory bundle as it would be written to disk
///
/// # Errors
///
/// Returns `Json` if the bundle cannot be converted to a JSON value
pub fn validate_bundle(bundle: &ExportBundle) -> DemoResult<ValidationReport> {
    let value = serde_json::to_value(bundle)?;
    Ok(validate_export(&value))
}

/// Read, parse, and validate an export file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Json` if it is not JSON
pub fn validate_file(path: impl AsRef<Path>) -> DemoResult<ValidationReport> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| DemoDataError::io(path, e))?;
    let value: Value = serde_json::from_str(&contents)?;
    Ok(validate_export(&value))
}
