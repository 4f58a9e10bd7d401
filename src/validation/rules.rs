// ABOUTME: Field presence and type rules used by the export validator
// ABOUTME: ValidationError diagnostics plus a record view that checks required fields by kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use super::Section;

/// Kind of JSON value found where another kind was expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Number without a fractional part
    Integer,
    /// Any other number
    Float,
    /// String
    String,
    /// Array
    Array,
    /// Object
    Object,
}

impl JsonKind {
    /// Classify a JSON value
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Null => "null",
            Self::Boolean => "a boolean",
            Self::Integer => "an integer",
            Self::Float => "a floating-point number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        };
        f.write_str(text)
    }
}

/// Kind a field is required to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    /// JSON string
    String,
    /// Any JSON number
    Number,
    /// JSON number without a fractional part
    Integer,
    /// JSON boolean
    Boolean,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl ExpectedKind {
    /// Whether `value` satisfies this kind
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::String => "a string",
            Self::Number => "a number",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::Array => "an array",
            Self::Object => "an object",
        };
        f.write_str(text)
    }
}

/// First structural problem found in a section
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent
    #[error("[{section}] {path} is missing required field `{field}`")]
    MissingField {
        /// Section being validated
        section: Section,
        /// JSON path of the object lacking the field
        path: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// A value has the wrong JSON kind
    #[error("[{section}] {path} must be {expected}, found {actual}")]
    WrongType {
        /// Section being validated
        section: Section,
        /// JSON path of the offending value
        path: String,
        /// Required kind
        expected: ExpectedKind,
        /// Kind actually present
        actual: JsonKind,
    },

    /// A meal slice lists zero or several foods
    #[error("[{section}] {path} (meal `{meal}`) must list exactly one food, found {count}")]
    FoodCount {
        /// Section being validated
        section: Section,
        /// JSON path of the meal slice
        path: String,
        /// Meal label, or `?` when the label is not a string
        meal: String,
        /// Number of foods listed
        count: usize,
    },
}

impl ValidationError {
    /// Section the problem was found in
    #[must_use]
    pub const fn section(&self) -> Section {
        match self {
            Self::MissingField { section, .. }
            | Self::WrongType { section, .. }
            | Self::FoodCount { section, .. } => *section,
        }
    }
}

/// Result of checking one section or record
pub type RuleResult<T> = Result<T, ValidationError>;

/// Require `value` to have `expected` kind
///
/// # Errors
///
/// Returns `WrongType` naming `path` when the kind differs
pub fn expect_kind(
    section: Section,
    path: &str,
    value: &Value,
    expected: ExpectedKind,
) -> RuleResult<()> {
    if expected.matches(value) {
        Ok(())
    } else {
        Err(ValidationError::WrongType {
            section,
            path: path.to_owned(),
            expected,
            actual: JsonKind::of(value),
        })
    }
}

/// Require `value` to be an array and return its items
///
/// # Errors
///
/// Returns `WrongType` when `value` is not an array
pub fn expect_array<'a>(
    section: Section,
    path: &str,
    value: &'a Value,
) -> RuleResult<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::WrongType {
            section,
            path: path.to_owned(),
            expected: ExpectedKind::Array,
            actual: JsonKind::of(value),
        })
}

/// An object under validation, with its JSON path for diagnostics
pub struct RecordView<'a> {
    section: Section,
    path: String,
    fields: &'a Map<String, Value>,
}

impl<'a> RecordView<'a> {
    /// View `value` as an object
    ///
    /// # Errors
    ///
    /// Returns `WrongType` when `value` is not an object
    pub fn new(section: Section, path: String, value: &'a Value) -> RuleResult<Self> {
        match value.as_object() {
            Some(fields) => Ok(Self {
                section,
                path,
                fields,
            }),
            None => Err(ValidationError::WrongType {
                section,
                path,
                expected: ExpectedKind::Object,
                actual: JsonKind::of(value),
            }),
        }
    }

    /// JSON path of this object
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Underlying fields
    #[must_use]
    pub const fn fields(&self) -> &'a Map<String, Value> {
        self.fields
    }

    /// Path of a field inside this object
    #[must_use]
    pub fn child_path(&self, field: &str) -> String {
        format!("{}.{field}", self.path)
    }

    /// Require every listed field to be present, reporting the first missing one
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for the first absent field in `fields` order
    pub fn require_all(&self, fields: &[&'static str]) -> RuleResult<()> {
        match fields
            .iter()
            .copied()
            .find(|field| !self.fields.contains_key(*field))
        {
            Some(field) => Err(ValidationError::MissingField {
                section: self.section,
                path: self.path.clone(),
                field,
            }),
            None => Ok(()),
        }
    }

    /// Fetch a field that must be present
    ///
    /// # Errors
    ///
    /// Returns `MissingField` when the field is absent
    pub fn field(&self, field: &'static str) -> RuleResult<&'a Value> {
        self.fields
            .get(field)
            .ok_or_else(|| ValidationError::MissingField {
                section: self.section,
                path: self.path.clone(),
                field,
            })
    }

    /// Fetch a present field and require its kind
    ///
    /// # Errors
    ///
    /// Returns `MissingField` or `WrongType`
    pub fn typed(&self, field: &'static str, expected: ExpectedKind) -> RuleResult<&'a Value> {
        let value = self.field(field)?;
        expect_kind(self.section, &self.child_path(field), value, expected)?;
        Ok(value)
    }

    /// Fetch a present field that must be an array
    ///
    /// # Errors
    ///
    /// Returns `MissingField` or `WrongType`
    pub fn array(&self, field: &'static str) -> RuleResult<&'a [Value]> {
        let value = self.field(field)?;
        expect_array(self.section, &self.child_path(field), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kind_distinguishes_integers() {
        assert_eq!(JsonKind::of(&json!(4)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(4.0)), JsonKind::Float);
        assert_eq!(JsonKind::of(&json!("4")), JsonKind::String);
        assert!(!ExpectedKind::Integer.matches(&json!(4.5)));
        assert!(ExpectedKind::Number.matches(&json!(4)));
    }

    #[test]
    fn test_require_all_reports_first_missing_field() {
        let value = json!({"date": "2025-01-01"});
        let record = RecordView::new(Section::Weights, "data.weights[0]".to_owned(), &value)
            .unwrap();
        let err = record.require_all(&["date", "weight"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[weights] data.weights[0] is missing required field `weight`"
        );
    }

    #[test]
    fn test_typed_reports_path_and_kinds() {
        let value = json!({"sets": "four"});
        let record =
            RecordView::new(Section::Workouts, "data.workouts.2025-01-01[0]".to_owned(), &value)
                .unwrap();
        let err = record.typed("sets", ExpectedKind::Integer).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[workouts] data.workouts.2025-01-01[0].sets must be an integer, found a string"
        );
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        let value = json!([1, 2]);
        let err = RecordView::new(Section::BodyFat, "data.bodyFat[3]".to_owned(), &value)
            .err()
            .unwrap();
        assert_eq!(err.section(), Section::BodyFat);
        assert!(err.to_string().contains("must be an object, found an array"));
    }
}
