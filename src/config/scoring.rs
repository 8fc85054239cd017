// ABOUTME: Product scoring configuration with grade points, penalty thresholds, and weights
// ABOUTME: Constants are chosen so healthy products land 75-100 and ultra-processed below 40
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

//! Product Scoring Configuration
//!
//! Provides the constant tables behind the product healthiness score: the
//! Nutri-Score grade→points map, the per-group processing deduction, the
//! nutrient excess penalty bands, and the preference penalties. All tables
//! are plain lookup structures; there is no dynamic dispatch.
//!
//! The defaults satisfy the engine's calibration constraint: a grade-A,
//! NOVA 1 product with low sugar/fat/salt scores above 75, while a grade-E,
//! NOVA 4 product with high sugar/fat/salt scores below 40.

use crate::config::error::ConfigError;
use crate::models::NutriScoreGrade;
use serde::{Deserialize, Serialize};

/// Product Scoring Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductScoringConfig {
    /// Nutri-Score grade to base points lookup
    pub grade_points: GradePointsConfig,
    /// NOVA processing level deduction
    pub processing: ProcessingPenaltyConfig,
    /// Per-nutrient excess penalty bands
    pub nutrients: NutrientPenaltiesConfig,
    /// Penalties driven by user dietary preferences
    pub preferences: PreferencePenaltiesConfig,
}

impl ProductScoringConfig {
    /// Validate the scoring constant tables
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when grade points are not strictly
    /// descending, any threshold or penalty is negative, or the exclusion
    /// penalty fails to outweigh the nutrient penalty caps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grade_points.validate()?;

        if self.processing.penalty_per_group_step < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "processing penalty_per_group_step must be >= 0",
            ));
        }

        self.nutrients.validate()?;

        if self.preferences.nova_excess_penalty_per_group < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "nova_excess_penalty_per_group must be >= 0",
            ));
        }

        // An exclusion is a hard dietary constraint, so its penalty must
        // dominate every soft nutrient penalty cap.
        let heaviest_nutrient_cap = self
            .nutrients
            .sugars
            .max_penalty
            .max(self.nutrients.saturated_fat.max_penalty)
            .max(self.nutrients.salt.max_penalty);
        if self.preferences.excluded_ingredient_penalty <= heaviest_nutrient_cap {
            return Err(ConfigError::InvalidWeights(
                "excluded_ingredient_penalty must exceed every nutrient penalty cap",
            ));
        }

        Ok(())
    }
}

/// Base points contributed by each Nutri-Score grade
///
/// Grade A is the healthiest and contributes the most; a product without a
/// recognized grade contributes the neutral mid-range value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradePointsConfig {
    /// Points for grade A
    pub grade_a: f64,
    /// Points for grade B
    pub grade_b: f64,
    /// Points for grade C
    pub grade_c: f64,
    /// Points for grade D
    pub grade_d: f64,
    /// Points for grade E
    pub grade_e: f64,
    /// Neutral points for an absent or unrecognized grade
    pub unknown: f64,
}

impl GradePointsConfig {
    /// Base points for a (possibly absent) grade
    #[must_use]
    pub const fn points_for(&self, grade: Option<NutriScoreGrade>) -> f64 {
        match grade {
            Some(NutriScoreGrade::A) => self.grade_a,
            Some(NutriScoreGrade::B) => self.grade_b,
            Some(NutriScoreGrade::C) => self.grade_c,
            Some(NutriScoreGrade::D) => self.grade_d,
            Some(NutriScoreGrade::E) => self.grade_e,
            None => self.unknown,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let descending = self.grade_a > self.grade_b
            && self.grade_b > self.grade_c
            && self.grade_c > self.grade_d
            && self.grade_d > self.grade_e;
        if !descending {
            return Err(ConfigError::InvalidWeights(
                "grade points must be strictly descending from A to E",
            ));
        }
        if self.unknown < self.grade_e || self.unknown > self.grade_a {
            return Err(ConfigError::InvalidRange(
                "unknown-grade points must lie between grade E and grade A",
            ));
        }
        Ok(())
    }
}

impl Default for GradePointsConfig {
    fn default() -> Self {
        Self {
            grade_a: 100.0,
            grade_b: 85.0,
            grade_c: 70.0,
            grade_d: 55.0,
            grade_e: 40.0,
            // Mid-range, same as grade C
            unknown: 70.0,
        }
    }
}

/// NOVA processing level deduction
///
/// Each group above 1 (unprocessed) deducts a fixed number of points, so a
/// NOVA 4 product loses three steps' worth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingPenaltyConfig {
    /// Points deducted per NOVA group above group 1
    pub penalty_per_group_step: f64,
}

impl Default for ProcessingPenaltyConfig {
    fn default() -> Self {
        Self {
            penalty_per_group_step: 5.0,
        }
    }
}

/// Penalty band for one nutrient: no penalty up to the healthy threshold,
/// then linear in the excess, capped
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutrientPenaltyBand {
    /// Healthy threshold in grams per 100g; content at or below it is free
    pub threshold_g_per_100g: f64,
    /// Points deducted per gram of excess over the threshold
    pub penalty_per_g: f64,
    /// Upper bound on the deduction from this nutrient
    pub max_penalty: f64,
}

impl NutrientPenaltyBand {
    /// Deduction for a declared per-100g quantity
    ///
    /// Absent quantities are skipped entirely (zero penalty), not treated as
    /// zero content.
    #[must_use]
    pub fn penalty_for(&self, quantity: Option<f64>) -> f64 {
        match quantity {
            Some(value) if value > self.threshold_g_per_100g => {
                ((value - self.threshold_g_per_100g) * self.penalty_per_g).min(self.max_penalty)
            }
            _ => 0.0,
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.threshold_g_per_100g < 0.0 || self.penalty_per_g < 0.0 || self.max_penalty < 0.0 {
            return Err(ConfigError::ValueOutOfRange(name));
        }
        Ok(())
    }
}

/// Per-nutrient excess penalty bands
///
/// Thresholds follow the usual per-100g "high in" guidance: sugar starts
/// penalizing above 5g, saturated fat above 2g, salt above 1g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientPenaltiesConfig {
    /// Sugars band
    pub sugars: NutrientPenaltyBand,
    /// Saturated fat band
    pub saturated_fat: NutrientPenaltyBand,
    /// Salt band
    pub salt: NutrientPenaltyBand,
}

impl NutrientPenaltiesConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.sugars
            .validate("sugars band must have non-negative threshold and penalties")?;
        self.saturated_fat
            .validate("saturated fat band must have non-negative threshold and penalties")?;
        self.salt
            .validate("salt band must have non-negative threshold and penalties")?;
        Ok(())
    }
}

impl Default for NutrientPenaltiesConfig {
    fn default() -> Self {
        Self {
            sugars: NutrientPenaltyBand {
                threshold_g_per_100g: 5.0,
                penalty_per_g: 1.0,
                max_penalty: 20.0,
            },
            saturated_fat: NutrientPenaltyBand {
                threshold_g_per_100g: 2.0,
                penalty_per_g: 1.5,
                max_penalty: 15.0,
            },
            salt: NutrientPenaltyBand {
                threshold_g_per_100g: 1.0,
                penalty_per_g: 10.0,
                max_penalty: 15.0,
            },
        }
    }
}

/// Penalties driven by user dietary preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencePenaltiesConfig {
    /// Points deducted per NOVA group over the user's `max_nova`
    pub nova_excess_penalty_per_group: f64,
    /// Points deducted per matched excluded ingredient; a hard constraint,
    /// heavier than any single nutrient penalty cap
    pub excluded_ingredient_penalty: f64,
}

impl Default for PreferencePenaltiesConfig {
    fn default() -> Self {
        Self {
            nova_excess_penalty_per_group: 12.5,
            excluded_ingredient_penalty: 30.0,
        }
    }
}
