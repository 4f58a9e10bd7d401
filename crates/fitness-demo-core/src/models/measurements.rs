// ABOUTME: Daily body measurement records for the export format
// ABOUTME: WeightRecord and BodyFatRecord, one per calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body weight on a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Calendar date of the measurement
    pub date: NaiveDate,
    /// Weight in kilograms, one decimal
    pub weight: f64,
}

/// Body fat percentage on a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatRecord {
    /// Calendar date of the measurement
    pub date: NaiveDate,
    /// Body fat in percent, one decimal
    pub body_fat_percentage: f64,
}
