// ABOUTME: Per-invocation user dietary preferences for product scoring
// ABOUTME: Maximum acceptable NOVA group and case-insensitive ingredient exclusions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

use crate::models::NovaGroup;
use serde::{Deserialize, Serialize};

/// Caller-supplied dietary preferences applied during product scoring
///
/// Absent fields default to "no additional penalty": `max_nova` of group 4
/// accepts everything, and an empty exclusion list matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPreferences {
    /// Highest NOVA group accepted without penalty
    #[serde(default = "default_max_nova")]
    pub max_nova: NovaGroup,

    /// Ingredient substrings the user wants to avoid, matched
    /// case-insensitively against the product's ingredient text
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
}

impl Default for ScoringPreferences {
    fn default() -> Self {
        Self {
            max_nova: default_max_nova(),
            excluded_ingredients: Vec::new(),
        }
    }
}

impl ScoringPreferences {
    /// Lower-cased, trimmed exclusion entries, with empty entries dropped
    ///
    /// Matching is normalized containment, no fuzzy matching.
    #[must_use]
    pub fn normalized_exclusions(&self) -> Vec<String> {
        self.excluded_ingredients
            .iter()
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}

const fn default_max_nova() -> NovaGroup {
    NovaGroup::UltraProcessed
}
