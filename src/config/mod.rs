// ABOUTME: Engine configuration root with env overrides and a process-wide singleton
// ABOUTME: Combines product scoring and nutrition calculator settings under EngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

//! # Engine Configuration
//!
//! All scoring weights, penalty thresholds, and calculator coefficients live
//! here as serde-backed structs with literature/design-constant defaults.
//! [`EngineConfig::global`] provides a lazily initialized process-wide
//! instance: defaults, overridden by `NUTRISCAN_*` environment variables,
//! then validated. A failed load logs a warning and falls back to defaults.

pub mod error;
pub mod nutrition;
pub mod scoring;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, MacroRatiosConfig, MacroSplit,
    NutritionConfig,
};
pub use scoring::{
    GradePointsConfig, NutrientPenaltiesConfig, NutrientPenaltyBand, PreferencePenaltiesConfig,
    ProcessingPenaltyConfig, ProductScoringConfig,
};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Product healthiness scoring tables
    pub scoring: ProductScoringConfig,
    /// Daily target calculator settings
    pub nutrition: NutritionConfig,
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override contains an invalid value
    /// or the final configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in either subsystem
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.nutrition.validate()?;
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Scoring overrides
        if let Ok(val) = std::env::var("NUTRISCAN_SCORING_SUGARS_THRESHOLD") {
            self.scoring.nutrients.sugars.threshold_g_per_100g = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRISCAN_SCORING_SUGARS_THRESHOLD".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRISCAN_SCORING_SATURATED_FAT_THRESHOLD") {
            self.scoring.nutrients.saturated_fat.threshold_g_per_100g = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid NUTRISCAN_SCORING_SATURATED_FAT_THRESHOLD".into())
            })?;
        }

        if let Ok(val) = std::env::var("NUTRISCAN_SCORING_SALT_THRESHOLD") {
            self.scoring.nutrients.salt.threshold_g_per_100g = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRISCAN_SCORING_SALT_THRESHOLD".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRISCAN_SCORING_PROCESSING_PENALTY") {
            self.scoring.processing.penalty_per_group_step = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid NUTRISCAN_SCORING_PROCESSING_PENALTY".into())
            })?;
        }

        if let Ok(val) = std::env::var("NUTRISCAN_SCORING_EXCLUSION_PENALTY") {
            self.scoring.preferences.excluded_ingredient_penalty = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid NUTRISCAN_SCORING_EXCLUSION_PENALTY".into())
            })?;
        }

        // Nutrition overrides
        if let Ok(val) = std::env::var("NUTRISCAN_NUTRITION_WEIGHT_LOSS_DEFICIT") {
            self.nutrition.calorie_adjustment.weight_loss_deficit_kcal =
                val.parse().map_err(|_| {
                    ConfigError::Parse("Invalid NUTRISCAN_NUTRITION_WEIGHT_LOSS_DEFICIT".into())
                })?;
        }

        if let Ok(val) = std::env::var("NUTRISCAN_NUTRITION_MUSCLE_GAIN_SURPLUS") {
            self.nutrition.calorie_adjustment.muscle_gain_surplus_kcal =
                val.parse().map_err(|_| {
                    ConfigError::Parse("Invalid NUTRISCAN_NUTRITION_MUSCLE_GAIN_SURPLUS".into())
                })?;
        }

        if let Ok(val) = std::env::var("NUTRISCAN_NUTRITION_MINIMUM_INTAKE") {
            self.nutrition.calorie_adjustment.minimum_intake_kcal = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid NUTRISCAN_NUTRITION_MINIMUM_INTAKE".into())
            })?;
        }

        Ok(self)
    }
}
