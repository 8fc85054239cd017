// ABOUTME: Configuration error types for engine config validation
// ABOUTME: Defines error variants for invalid ranges, weight tables, and override parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

//! Configuration error types for engine config validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., threshold below zero)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse a configuration override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weight table violates a structural constraint (ordering, sum)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
