// ABOUTME: Library entry point for the NutriScan intelligence engine
// ABOUTME: Re-exports product scoring, daily target calculation, config, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

#![deny(unsafe_code)]

//! # NutriScan Intelligence
//!
//! The intelligence layer of the NutriScan nutrition platform: pure,
//! deterministic computations invoked by the scanner, diary, and onboarding
//! route handlers. No network, file, or database access lives here; callers
//! fetch product data from the open food database and forward it to this
//! crate.
//!
//! ## Features
//!
//! - **Product scoring**: a single healthiness scalar from a product's
//!   Nutri-Score grade, NOVA processing group, nutrient declaration, and the
//!   user's dietary preferences, with a per-component breakdown and a UI
//!   color band
//! - **Daily targets**: BMI, Mifflin-St Jeor BMR, activity-factor TDEE,
//!   objective-adjusted calorie target, and macro gram targets
//! - **Lenient wire parsing**: models deserialize straight from the open
//!   food database JSON, treating its junk values as absent data
//!
//! ## Example
//!
//! ```
//! use nutriscan_intelligence::config::EngineConfig;
//! use nutriscan_intelligence::models::Product;
//! use nutriscan_intelligence::product_scorer::score_product;
//!
//! let product: Product = serde_json::from_str(
//!     r#"{ "nutriscore_grade": "a", "nova_group": 1 }"#,
//! )?;
//!
//! let config = EngineConfig::global();
//! let score = score_product(&product, None, &config.scoring);
//! assert!(score > 75.0);
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Engine configuration: scoring tables and calculator coefficients
pub mod config;
/// Unified error handling
pub mod errors;
/// Product and preference models
pub mod models;
/// Daily energy and macro target calculations
pub mod nutrition_calculator;
/// Product healthiness scoring
pub mod product_scorer;

pub use config::EngineConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{NovaGroup, NutriScoreGrade, Nutrients, Product, ScoringPreferences};
pub use nutrition_calculator::{
    calculate_daily_targets, ActivityLevel, BiometricProfile, BmiCategory, DailyTargets,
    MacroTargets, Objective, Sex,
};
pub use product_scorer::{evaluate_product, score_product, ProductScore, ScoreBand};
