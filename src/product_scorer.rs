// ABOUTME: Product healthiness scoring from nutritional declarations and dietary preferences
// ABOUTME: Weighted grade base minus processing, nutrient excess, and preference penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

//! Product Scorer Module
//!
//! Scores a scanned food product's healthiness from its nutritional
//! declaration and optional user dietary preferences. The result is a single
//! scalar (higher is healthier) used to rank or color-code products in the
//! scanner and recipe UIs, plus a breakdown of where the points went.
//!
//! The computation is pure and single-pass: same inputs, same output, no
//! shared state, no I/O. It is safe to invoke concurrently from any number
//! of callers.
//!
//! # References
//!
//! - Monteiro, C.A., et al. (2018). The UN Decade of Nutrition, the NOVA
//!   food classification and the trouble with ultra-processing.
//!   *Public Health Nutrition*, 21(1), 5-17.
//!   <https://doi.org/10.1017/S1368980017000234>
//!
//! - Julia, C., & Hercberg, S. (2017). Development of a new front-of-pack
//!   nutrition label in France: the five-colour Nutri-Score.
//!   *Public Health Panorama*, 3(4), 712-725.

use crate::config::{PreferencePenaltiesConfig, ProductScoringConfig};
use crate::models::{Product, ScoringPreferences};
use serde::{Deserialize, Serialize};

/// Qualitative band derived from the scalar score, used for UI color-coding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Healthy choice (score 75 and above)
    Excellent,
    /// Reasonable choice (score 55-75)
    Good,
    /// Consume in moderation (score 40-55)
    Fair,
    /// Typical ultra-processed territory (score below 40)
    Poor,
}

impl ScoreBand {
    /// Band for a scalar score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Excellent
        } else if score >= 55.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Full scoring result with the per-component breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductScore {
    /// Final score; higher is healthier
    pub score: f64,

    /// Qualitative band for UI color-coding
    pub band: ScoreBand,

    /// Base points contributed by the Nutri-Score grade
    pub base_points: f64,

    /// Deduction from the NOVA processing group
    pub processing_penalty: f64,

    /// Combined deduction from sugar, saturated fat, and salt excess
    pub nutrient_penalty: f64,

    /// Deduction from user preferences (NOVA ceiling and exclusions)
    pub preference_penalty: f64,

    /// Normalized exclusion entries that matched the ingredient text
    pub matched_exclusions: Vec<String>,
}

/// Score a product's healthiness
///
/// Convenience wrapper around [`evaluate_product`] returning only the scalar.
///
/// # Arguments
/// * `product` - The product's nutritional declaration
/// * `preferences` - Optional per-user dietary preferences; `None` means no
///   additional penalties
/// * `config` - Scoring constant tables
#[must_use]
pub fn score_product(
    product: &Product,
    preferences: Option<&ScoringPreferences>,
    config: &ProductScoringConfig,
) -> f64 {
    evaluate_product(product, preferences, config).score
}

/// Score a product's healthiness with a full breakdown
///
/// The algorithm is a weighted sum:
///
/// 1. Base points from the Nutri-Score grade (neutral mid-range value when
///    absent or unrecognized).
/// 2. Minus a deduction per NOVA group above 1 (absent group deducts nothing).
/// 3. Minus capped deductions proportional to sugar, saturated fat, and salt
///    content exceeding their healthy per-100g thresholds; absent fields are
///    skipped, not treated as zero content.
/// 4. Minus a penalty proportional to how far the NOVA group exceeds the
///    user's `max_nova` ceiling.
/// 5. Minus a large fixed penalty per excluded ingredient found in the
///    ingredient text (case-insensitive containment); a hard dietary
///    constraint, heavier than any nutrient penalty.
///
/// The result is not clamped: relative order is preserved even among very
/// poor products so ranking stays meaningful.
///
/// Missing or malformed optional fields never cause a failure; they simply
/// contribute nothing.
#[must_use]
pub fn evaluate_product(
    product: &Product,
    preferences: Option<&ScoringPreferences>,
    config: &ProductScoringConfig,
) -> ProductScore {
    let base_points = config.grade_points.points_for(product.nutri_score_grade);

    let processing_penalty = product.nova_group.map_or(0.0, |nova| {
        f64::from(nova.steps_above_unprocessed()) * config.processing.penalty_per_group_step
    });

    let nutrients = &product.nutrients;
    let nutrient_penalty = config.nutrients.sugars.penalty_for(nutrients.sugars_per_100g)
        + config
            .nutrients
            .saturated_fat
            .penalty_for(nutrients.saturated_fat_per_100g)
        + config.nutrients.salt.penalty_for(nutrients.salt_per_100g);

    let (preference_penalty, matched_exclusions) = preferences.map_or_else(
        || (0.0, Vec::new()),
        |prefs| apply_preferences(product, prefs, &config.preferences),
    );

    let score = base_points - processing_penalty - nutrient_penalty - preference_penalty;

    ProductScore {
        score,
        band: ScoreBand::from_score(score),
        base_points,
        processing_penalty,
        nutrient_penalty,
        preference_penalty,
        matched_exclusions,
    }
}

/// Apply the user's dietary preferences to a product
///
/// Returns the combined preference penalty and the normalized exclusion
/// entries that matched the ingredient text.
fn apply_preferences(
    product: &Product,
    preferences: &ScoringPreferences,
    config: &PreferencePenaltiesConfig,
) -> (f64, Vec<String>) {
    let mut penalty = 0.0;

    if let Some(nova) = product.nova_group {
        if nova > preferences.max_nova {
            let excess = nova.group() - preferences.max_nova.group();
            penalty += f64::from(excess) * config.nova_excess_penalty_per_group;
        }
    }

    let mut matched = Vec::new();
    if let Some(text) = product.ingredients_text.as_deref() {
        let haystack = text.to_lowercase();
        for needle in preferences.normalized_exclusions() {
            if haystack.contains(&needle) {
                tracing::debug!(ingredient = %needle, "excluded ingredient matched");
                penalty += config.excluded_ingredient_penalty;
                matched.push(needle);
            }
        }
    }

    (penalty, matched)
}
