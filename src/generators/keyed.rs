// ABOUTME: Keyed determinism for workout completion flags
// ABOUTME: Hashes a (date, name) key to a stable value in [0, 1) without touching the ambient RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The completion flag of a workout depends only on its date and name, so the
//! same exercise on the same day is always completed (or always skipped)
//! across runs, while which exercises land on that day stays random.

use fitness_demo_core::constants::workouts::COMPLETION_THRESHOLD;
use sha2::{Digest, Sha256};

/// Number of mantissa bits in an `f64`
const UNIT_INTERVAL_BITS: u32 = 53;

/// Map a `(date, name)` key to a stable value in `[0, 1)`
///
/// The key is `"{date_key}_{name}"`, hashed with SHA-256; the top 53 bits of
/// the digest become the fraction.
#[must_use]
pub fn keyed_unit_interval(date_key: &str, name: &str) -> f64 {
    let digest = Sha256::digest(format!("{date_key}_{name}").as_bytes());
    let mut prefix = [0_u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let bits = u64::from_be_bytes(prefix) >> (64 - UNIT_INTERVAL_BITS);
    bits as f64 / (1_u64 << UNIT_INTERVAL_BITS) as f64
}

/// Whether the workout `name` logged on `date_key` counts as completed
#[must_use]
pub fn is_workout_completed(date_key: &str, name: &str) -> bool {
    keyed_unit_interval(date_key, name) > COMPLETION_THRESHOLD
}
