// ABOUTME: Nutrition calculator configuration for BMR, TDEE, calorie targets, and macro ratios
// ABOUTME: Defaults carry the published formula coefficients and the app's onboarding macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

//! Nutrition Calculator Configuration
//!
//! Configures the daily-target pipeline: BMR formula coefficients, activity
//! factor multipliers, objective-based calorie adjustments, and macro ratio
//! splits.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use crate::config::error::ConfigError;
use crate::nutrition_calculator::Objective;
use serde::{Deserialize, Serialize};

/// Nutrition Calculator Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Objective-based daily calorie adjustments
    pub calorie_adjustment: CalorieAdjustmentConfig,
    /// Macro ratio splits per objective
    pub macro_ratios: MacroRatiosConfig,
}

impl NutritionConfig {
    /// Validate all nutrition calculator settings
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when activity factors are not ascending,
    /// calorie adjustments are negative, or a macro split does not sum to 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.calorie_adjustment.validate()?;
        self.macro_ratios.validate()?;
        Ok(())
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Safety floor on the computed BMR (kcal/day)
    pub minimum_bmr_kcal: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            minimum_bmr_kcal: 1000.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let ascending = self.sedentary < self.lightly_active
            && self.lightly_active < self.moderately_active
            && self.moderately_active < self.very_active
            && self.very_active < self.extra_active;
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "activity factors must be in ascending order",
            ));
        }
        if self.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sedentary activity factor must be at least 1.0",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Objective-based daily calorie adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Daily deficit applied for the weight loss objective (kcal)
    pub weight_loss_deficit_kcal: f64,
    /// Daily surplus applied for the muscle gain objective (kcal)
    pub muscle_gain_surplus_kcal: f64,
    /// Floor on the adjusted daily target (kcal)
    pub minimum_intake_kcal: f64,
}

impl CalorieAdjustmentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.weight_loss_deficit_kcal < 0.0 || self.muscle_gain_surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie adjustments must be non-negative",
            ));
        }
        if self.minimum_intake_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum_intake_kcal must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: 500.0,
            muscle_gain_surplus_kcal: 300.0,
            minimum_intake_kcal: 1200.0,
        }
    }
}

/// Macro split for one objective (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroSplit {
    /// Create a new macro split
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct.saturating_add(carbs_pct).saturating_add(fat_pct) == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }
}

/// Macro ratio splits per onboarding objective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatiosConfig {
    /// Weight loss: higher protein for satiety and muscle preservation
    /// Default: (35% protein, 35% carbs, 30% fat)
    pub lose_weight: MacroSplit,
    /// Maintenance: balanced everyday split
    /// Default: (25% protein, 45% carbs, 30% fat)
    pub maintain: MacroSplit,
    /// Muscle gain: protein and carbs support the training surplus
    /// Default: (30% protein, 45% carbs, 25% fat)
    pub gain_muscle: MacroSplit,
}

impl MacroRatiosConfig {
    /// Get the macro split for a specific objective
    #[must_use]
    pub const fn split_for(&self, objective: Objective) -> MacroSplit {
        match objective {
            Objective::LoseWeight => self.lose_weight,
            Objective::Maintain => self.maintain,
            Objective::GainMuscle => self.gain_muscle,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("lose_weight", self.lose_weight),
            ("maintain", self.maintain),
            ("gain_muscle", self.gain_muscle),
        ];

        for (name, split) in splits {
            let sum = split
                .protein_pct
                .saturating_add(split.carbs_pct)
                .saturating_add(split.fat_pct);
            if sum != 100 {
                tracing::warn!(objective = name, sum, "macro split does not sum to 100");
                return Err(ConfigError::InvalidWeights(
                    "macro split percentages must sum to 100",
                ));
            }
        }

        Ok(())
    }
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        Self {
            lose_weight: MacroSplit::new(35, 35, 30),
            maintain: MacroSplit::new(25, 45, 30),
            gain_muscle: MacroSplit::new(30, 45, 25),
        }
    }
}
