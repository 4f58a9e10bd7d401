// ABOUTME: Per-section validation outcomes and the overall pass/fail report
// ABOUTME: Passing sections carry record counts; failing sections carry their first diagnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use super::rules::ValidationError;
use super::Section;

/// What a passing section contained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSummary {
    /// Envelope and `data` fields present
    Structure,
    /// Flat list of daily records
    Records {
        /// Number of records
        count: usize,
    },
    /// Workout map
    Workouts {
        /// Days present in the map
        days: usize,
        /// Workouts across all days
        entries: usize,
    },
    /// Nutrition list
    Nutrition {
        /// Nutrition days
        days: usize,
        /// Meal slices across all days
        slices: usize,
    },
    /// User settings object
    Settings {
        /// Number of keys present
        fields: usize,
    },
}

impl fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "required fields present"),
            Self::Records { count } => write!(f, "{count} records"),
            Self::Workouts { days, entries } => write!(f, "{days} days, {entries} workouts"),
            Self::Nutrition { days, slices } => {
                write!(f, "{days} days, {slices} meal slices with one food each")
            }
            Self::Settings { fields } => write!(f, "{fields} fields"),
        }
    }
}

/// Result of validating one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Section that was validated
    pub section: Section,
    /// Summary on success, first problem on failure
    pub result: Result<SectionSummary, ValidationError>,
}

impl SectionOutcome {
    /// Whether the section passed
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for SectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(summary) => write!(f, "✓ {}: {summary}", self.section),
            Err(err) => write!(f, "✗ {err}"),
        }
    }
}

/// Outcome of validating a whole export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<SectionOutcome>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, section: Section, result: Result<SectionSummary, ValidationError>) {
        self.outcomes.push(SectionOutcome { section, result });
    }

    /// Whether every examined section passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(SectionOutcome::passed)
    }

    /// Outcomes in validation order
    #[must_use]
    pub fn outcomes(&self) -> &[SectionOutcome] {
        &self.outcomes
    }

    /// Outcome for one section, if it was examined
    #[must_use]
    pub fn outcome(&self, section: Section) -> Option<&SectionOutcome> {
        self.outcomes.iter().find(|o| o.section == section)
    }

    /// Diagnostics of every failing section
    pub fn failures(&self) -> impl Iterator<Item = &ValidationError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        Ok(())
    }
}
