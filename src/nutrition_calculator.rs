// ABOUTME: Daily energy and macro target calculations for onboarding and progress tracking
// ABOUTME: BMI, Mifflin-St Jeor BMR, activity-factor TDEE, and objective-based macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

//! Nutrition Calculator Module
//!
//! Implements the daily-target pipeline run during onboarding and whenever a
//! user updates their biometrics: BMI (IMC), basal metabolic rate, total
//! daily energy expenditure, an objective-adjusted calorie target, and the
//! macro gram targets derived from it.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise
//!   Physiology: Nutrition, Energy, and Human Performance*. 7th ed.
//!
//! - WHO (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894 (BMI classification).

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, MacroRatiosConfig, MacroSplit,
    NutritionConfig,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Energy density of protein (kcal per gram)
const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrates (kcal per gram)
const KCAL_PER_G_CARBS: f64 = 4.0;
/// Energy density of fat (kcal per gram)
const KCAL_PER_G_FAT: f64 = 9.0;

/// Sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

/// User objective chosen during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Caloric deficit
    LoseWeight,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    GainMuscle,
}

/// WHO BMI classification band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5-24.9
    Normal,
    /// BMI 25.0-29.9
    Overweight,
    /// BMI 30.0 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value into its WHO band
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// User biometrics and lifestyle parameters for daily target calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Sex for BMR calculation
    pub sex: Sex,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Objective for calorie adjustment and macro split
    pub objective: Objective,
}

/// Daily macronutrient gram targets with the split they were derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
    /// Percentage split the grams were derived from
    pub split: MacroSplit,
}

/// Complete daily target calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Body Mass Index (kg/m²)
    pub bmi: f64,

    /// WHO BMI classification
    pub bmi_category: BmiCategory,

    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,

    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,

    /// Objective-adjusted daily calorie target (kcal/day)
    pub calorie_target: f64,

    /// Macro gram targets for the calorie target
    pub macros: MacroTargets,

    /// Activity level used
    pub activity_level: ActivityLevel,

    /// Objective used
    pub objective: Objective,
}

/// Calculate Body Mass Index (IMC)
///
/// Formula: BMI = `weight_kg` / (`height_m`)²
///
/// # Errors
///
/// Returns an error if weight or height is out of valid range
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    validate_body_measurements(weight_kg, height_cm)?;

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + sex constant
/// - Men: +5
/// - Women: -161
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `sex` - Male or Female
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    validate_body_measurements(weight_kg, height_cm)?;
    if !(15..=100).contains(&age) {
        return Err(AppError::value_out_of_range(
            "Age must be between 15 and 100 years",
        ));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let bmr = weight_component + height_component + age_component + sex_constant;

    Ok(bmr.max(config.minimum_bmr_kcal))
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    Ok(bmr * activity_factor)
}

/// Calculate the objective-adjusted daily calorie target
///
/// Weight loss subtracts the configured deficit, muscle gain adds the
/// configured surplus, maintenance leaves TDEE unchanged. The result is
/// floored at the configured minimum daily intake.
///
/// # Errors
///
/// Returns an error if TDEE is not positive
pub fn calculate_calorie_target(
    tdee: f64,
    objective: Objective,
    config: &CalorieAdjustmentConfig,
) -> AppResult<f64> {
    if tdee <= 0.0 {
        return Err(AppError::invalid_input("TDEE must be positive"));
    }

    let adjusted = match objective {
        Objective::LoseWeight => tdee - config.weight_loss_deficit_kcal,
        Objective::Maintain => tdee,
        Objective::GainMuscle => tdee + config.muscle_gain_surplus_kcal,
    };

    Ok(adjusted.max(config.minimum_intake_kcal))
}

/// Calculate macro gram targets from a calorie target and objective
///
/// Grams follow from the objective's percentage split at 4 kcal/g for
/// protein and carbohydrates and 9 kcal/g for fat.
///
/// # Errors
///
/// Returns an error if the calorie target is not positive
pub fn calculate_macro_targets(
    calorie_target: f64,
    objective: Objective,
    config: &MacroRatiosConfig,
) -> AppResult<MacroTargets> {
    if calorie_target <= 0.0 {
        return Err(AppError::invalid_input("Calorie target must be positive"));
    }

    let split = config.split_for(objective);
    let protein_kcal = calorie_target * f64::from(split.protein_pct) / 100.0;
    let carbs_kcal = calorie_target * f64::from(split.carbs_pct) / 100.0;
    let fat_kcal = calorie_target * f64::from(split.fat_pct) / 100.0;

    Ok(MacroTargets {
        protein_g: protein_kcal / KCAL_PER_G_PROTEIN,
        carbs_g: carbs_kcal / KCAL_PER_G_CARBS,
        fat_g: fat_kcal / KCAL_PER_G_FAT,
        split,
    })
}

/// Calculate complete daily targets for a user profile
///
/// Main entry point chaining BMI, BMR, TDEE, calorie adjustment, and macro
/// targets.
///
/// # Errors
///
/// Returns an error if any input validation fails
pub fn calculate_daily_targets(
    profile: &BiometricProfile,
    config: &NutritionConfig,
) -> AppResult<DailyTargets> {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;

    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.bmr,
    )?;

    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;

    let calorie_target =
        calculate_calorie_target(tdee, profile.objective, &config.calorie_adjustment)?;

    let macros = calculate_macro_targets(calorie_target, profile.objective, &config.macro_ratios)?;

    Ok(DailyTargets {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        bmr,
        tdee,
        calorie_target,
        macros,
        activity_level: profile.activity_level,
        objective: profile.objective,
    })
}

fn validate_body_measurements(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::value_out_of_range(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::value_out_of_range(
            "Height must be between 0 and 300 cm",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_bmi_categories() {
        assert_eq!(BmiCategory::from_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(22.0), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(27.5), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(31.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        assert!(calculate_bmi(70.0, 0.0).is_err());
    }

    #[test]
    fn test_macro_grams_recover_calorie_target() {
        let targets =
            calculate_macro_targets(2000.0, Objective::Maintain, &MacroRatiosConfig::default())
                .unwrap();
        let kcal = targets.protein_g * KCAL_PER_G_PROTEIN
            + targets.carbs_g * KCAL_PER_G_CARBS
            + targets.fat_g * KCAL_PER_G_FAT;
        assert!((kcal - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_floor_enforced() {
        let config = CalorieAdjustmentConfig::default();
        let target = calculate_calorie_target(1400.0, Objective::LoseWeight, &config).unwrap();
        assert_eq!(target, config.minimum_intake_kcal);
    }
}
