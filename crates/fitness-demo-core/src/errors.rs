// ABOUTME: Error type for demo data generation, export, and file validation
// ABOUTME: Wraps I/O and JSON failures with the offending path, plus configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Demo Data Errors
//!
//! Operational failures only. Schema violations found while validating an
//! export are not errors in this sense; they are reported through the
//! validator's own report type so that every section can still be listed.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures that stop a generator or validator run
#[derive(Error, Debug)]
pub enum DemoDataError {
    /// Reading or writing a file failed
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A document could not be parsed or serialized as JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A generator setting is outside its accepted range
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending setting
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl DemoDataError {
    /// Attach a path to an I/O error
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the workspace
pub type DemoResult<T> = Result<T, DemoDataError>;
