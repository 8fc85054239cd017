// ABOUTME: Comprehensive tests for the product healthiness scorer
// ABOUTME: Covers calibration bounds, preference penalties, monotonicity, and tolerance to missing data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

//! Comprehensive scorer tests
//!
//! This suite covers the whole scoring contract:
//! - Calibration bounds (healthy products above 75, ultra-processed below 40)
//! - Preference penalties (NOVA ceiling, excluded ingredients)
//! - Purity and monotonicity of the scalar
//! - Graceful degradation on absent and malformed fields
//! - End-to-end scoring of open food database JSON

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan_intelligence::config::{EngineConfig, ProductScoringConfig};
use nutriscan_intelligence::models::{
    NovaGroup, NutriScoreGrade, Nutrients, Product, ScoringPreferences,
};
use nutriscan_intelligence::product_scorer::{evaluate_product, score_product, ScoreBand};
use serde_json::json;

fn product(
    grade: Option<NutriScoreGrade>,
    nova: Option<NovaGroup>,
    sugars: Option<f64>,
    saturated_fat: Option<f64>,
    salt: Option<f64>,
) -> Product {
    Product {
        nutri_score_grade: grade,
        nova_group: nova,
        nutrients: Nutrients {
            sugars_per_100g: sugars,
            saturated_fat_per_100g: saturated_fat,
            salt_per_100g: salt,
        },
        ..Product::default()
    }
}

// ============================================================================
// CALIBRATION BOUNDS
// ============================================================================

#[test]
fn test_healthy_product_scores_above_75() {
    let config = ProductScoringConfig::default();

    // Grade A, unprocessed, low sugar/fat/salt
    let healthy = product(
        Some(NutriScoreGrade::A),
        Some(NovaGroup::Unprocessed),
        Some(2.0),
        Some(1.0),
        Some(0.5),
    );

    let score = score_product(&healthy, None, &config);
    assert!(score > 75.0, "healthy product should score above 75, got {score}");
    assert_eq!(ScoreBand::from_score(score), ScoreBand::Excellent);
}

#[test]
fn test_ultra_processed_product_scores_below_40() {
    let config = ProductScoringConfig::default();

    // Grade E, ultra-processed, high sugar/fat/salt
    let junk = product(
        Some(NutriScoreGrade::E),
        Some(NovaGroup::UltraProcessed),
        Some(25.0),
        Some(10.0),
        Some(2.0),
    );

    let score = score_product(&junk, None, &config);
    assert!(score < 40.0, "ultra-processed product should score below 40, got {score}");
    assert_eq!(ScoreBand::from_score(score), ScoreBand::Poor);
}

#[test]
fn test_global_config_scores_like_defaults() {
    let global = EngineConfig::global();
    let healthy = product(
        Some(NutriScoreGrade::A),
        Some(NovaGroup::Unprocessed),
        Some(2.0),
        Some(1.0),
        Some(0.5),
    );
    assert!(score_product(&healthy, None, &global.scoring) > 75.0);
}

// ============================================================================
// EXCLUDED INGREDIENT PENALTY
// ============================================================================

#[test]
fn test_excluded_ingredient_applies_fixed_large_penalty() {
    let config = ProductScoringConfig::default();

    // Grade B, NOVA 2, sugars 10: base 85 - processing 5 - sugar excess 5 = 75
    let mut cocoa = product(
        Some(NutriScoreGrade::B),
        Some(NovaGroup::CulinaryIngredients),
        Some(10.0),
        None,
        None,
    );
    cocoa.ingredients_text = Some("leche descremada, cacao".to_owned());

    let prefs = ScoringPreferences {
        excluded_ingredients: vec!["leche".to_owned()],
        ..ScoringPreferences::default()
    };

    let without = score_product(&cocoa, None, &config);
    let with = score_product(&cocoa, Some(&prefs), &config);

    assert!(with < 50.0, "excluded ingredient should push score below 50, got {with}");
    let margin = without - with;
    assert!(
        (margin - config.preferences.excluded_ingredient_penalty).abs() < 1e-9,
        "exclusion must subtract the fixed penalty, got margin {margin}"
    );
}

#[test]
fn test_exclusion_matching_is_case_insensitive() {
    let config = ProductScoringConfig::default();

    let mut cocoa = product(Some(NutriScoreGrade::B), None, None, None, None);
    cocoa.ingredients_text = Some("Leche Descremada, Cacao".to_owned());

    let prefs = ScoringPreferences {
        excluded_ingredients: vec!["  LECHE ".to_owned()],
        ..ScoringPreferences::default()
    };

    let result = evaluate_product(&cocoa, Some(&prefs), &config);
    assert_eq!(result.matched_exclusions, vec!["leche"]);
    assert!(result.preference_penalty > 0.0);
}

#[test]
fn test_each_matched_exclusion_penalized() {
    let config = ProductScoringConfig::default();

    let mut bar = product(Some(NutriScoreGrade::C), None, None, None, None);
    bar.ingredients_text = Some("leche, cacao, maní, azúcar".to_owned());

    let prefs = ScoringPreferences {
        excluded_ingredients: vec!["leche".to_owned(), "maní".to_owned(), "soja".to_owned()],
        ..ScoringPreferences::default()
    };

    let result = evaluate_product(&bar, Some(&prefs), &config);
    assert_eq!(result.matched_exclusions.len(), 2);
    let expected = 2.0 * config.preferences.excluded_ingredient_penalty;
    assert!((result.preference_penalty - expected).abs() < 1e-9);
}

#[test]
fn test_missing_ingredient_text_matches_nothing() {
    let config = ProductScoringConfig::default();
    let plain = product(Some(NutriScoreGrade::B), None, None, None, None);

    let prefs = ScoringPreferences {
        excluded_ingredients: vec!["leche".to_owned()],
        ..ScoringPreferences::default()
    };

    let result = evaluate_product(&plain, Some(&prefs), &config);
    assert!(result.matched_exclusions.is_empty());
    assert_eq!(result.preference_penalty, 0.0);
}

// ============================================================================
// NOVA CEILING PENALTY
// ============================================================================

#[test]
fn test_nova_over_ceiling_scores_below_50() {
    let config = ProductScoringConfig::default();

    // Grade B, NOVA 4, ceiling at 2: base 85 - processing 15 - excess 2x12.5 = 45
    let processed = product(
        Some(NutriScoreGrade::B),
        Some(NovaGroup::UltraProcessed),
        None,
        None,
        None,
    );
    let prefs = ScoringPreferences {
        max_nova: NovaGroup::CulinaryIngredients,
        ..ScoringPreferences::default()
    };

    let score = score_product(&processed, Some(&prefs), &config);
    assert!(score < 50.0, "NOVA over ceiling should score below 50, got {score}");
}

#[test]
fn test_nova_ceiling_penalty_scales_with_excess() {
    let config = ProductScoringConfig::default();
    let prefs = ScoringPreferences {
        max_nova: NovaGroup::Unprocessed,
        ..ScoringPreferences::default()
    };

    let one_over = product(None, Some(NovaGroup::CulinaryIngredients), None, None, None);
    let three_over = product(None, Some(NovaGroup::UltraProcessed), None, None, None);

    let penalty_one = evaluate_product(&one_over, Some(&prefs), &config).preference_penalty;
    let penalty_three = evaluate_product(&three_over, Some(&prefs), &config).preference_penalty;

    assert!((penalty_one - config.preferences.nova_excess_penalty_per_group).abs() < 1e-9);
    assert!((penalty_three - 3.0 * config.preferences.nova_excess_penalty_per_group).abs() < 1e-9);
}

#[test]
fn test_nova_at_ceiling_not_penalized() {
    let config = ProductScoringConfig::default();
    let prefs = ScoringPreferences {
        max_nova: NovaGroup::Processed,
        ..ScoringPreferences::default()
    };

    let at_ceiling = product(None, Some(NovaGroup::Processed), None, None, None);
    let result = evaluate_product(&at_ceiling, Some(&prefs), &config);
    assert_eq!(result.preference_penalty, 0.0);
}

// ============================================================================
// PURITY AND MONOTONICITY
// ============================================================================

#[test]
fn test_scoring_is_idempotent() {
    let config = ProductScoringConfig::default();
    let mut snack = product(
        Some(NutriScoreGrade::C),
        Some(NovaGroup::Processed),
        Some(12.0),
        Some(3.0),
        Some(1.4),
    );
    snack.ingredients_text = Some("harina, azúcar, sal".to_owned());
    let prefs = ScoringPreferences {
        max_nova: NovaGroup::CulinaryIngredients,
        excluded_ingredients: vec!["azúcar".to_owned()],
    };

    let first = score_product(&snack, Some(&prefs), &config);
    let second = score_product(&snack, Some(&prefs), &config);
    assert_eq!(first, second);
}

#[test]
fn test_score_never_increases_with_more_sugar() {
    let config = ProductScoringConfig::default();
    let sweep = [0.0, 2.0, 5.0, 8.0, 15.0, 30.0, 60.0];

    let mut previous = f64::INFINITY;
    for sugars in sweep {
        let score = score_product(
            &product(Some(NutriScoreGrade::B), None, Some(sugars), None, None),
            None,
            &config,
        );
        assert!(score <= previous, "score rose when sugar rose to {sugars}");
        previous = score;
    }
}

#[test]
fn test_score_never_increases_with_more_saturated_fat() {
    let config = ProductScoringConfig::default();
    let sweep = [0.0, 1.0, 2.0, 4.0, 9.0, 20.0];

    let mut previous = f64::INFINITY;
    for fat in sweep {
        let score = score_product(
            &product(Some(NutriScoreGrade::B), None, None, Some(fat), None),
            None,
            &config,
        );
        assert!(score <= previous, "score rose when saturated fat rose to {fat}");
        previous = score;
    }
}

#[test]
fn test_score_never_increases_with_more_salt() {
    let config = ProductScoringConfig::default();
    let sweep = [0.0, 0.3, 1.0, 1.5, 2.5, 6.0];

    let mut previous = f64::INFINITY;
    for salt in sweep {
        let score = score_product(
            &product(Some(NutriScoreGrade::B), None, None, None, Some(salt)),
            None,
            &config,
        );
        assert!(score <= previous, "score rose when salt rose to {salt}");
        previous = score;
    }
}

#[test]
fn test_score_never_increases_with_higher_nova_group() {
    let config = ProductScoringConfig::default();
    let prefs = ScoringPreferences {
        max_nova: NovaGroup::CulinaryIngredients,
        ..ScoringPreferences::default()
    };

    let mut previous = f64::INFINITY;
    for group in 1..=4u8 {
        let nova = NovaGroup::from_group(group).unwrap();
        let score = score_product(
            &product(Some(NutriScoreGrade::B), Some(nova), None, None, None),
            Some(&prefs),
            &config,
        );
        assert!(score <= previous, "score rose when NOVA group rose to {group}");
        previous = score;
    }
}

// ============================================================================
// MISSING-FIELD TOLERANCE
// ============================================================================

#[test]
fn test_empty_product_scores_in_valid_range() {
    let config = ProductScoringConfig::default();
    let score = score_product(&Product::default(), None, &config);
    assert!((0.0..=100.0).contains(&score));
}

#[test]
fn test_absent_nutrients_are_skipped_not_zeroed() {
    let config = ProductScoringConfig::default();

    let declared_zero = product(Some(NutriScoreGrade::B), None, Some(0.0), Some(0.0), Some(0.0));
    let undeclared = product(Some(NutriScoreGrade::B), None, None, None, None);

    // Both sit below every threshold, so neither is penalized
    assert_eq!(
        score_product(&declared_zero, None, &config),
        score_product(&undeclared, None, &config)
    );
}

#[test]
fn test_unknown_grade_contributes_neutral_base() {
    let config = ProductScoringConfig::default();
    let ungraded = product(None, None, None, None, None);
    let graded_c = product(Some(NutriScoreGrade::C), None, None, None, None);

    assert_eq!(
        score_product(&ungraded, None, &config),
        score_product(&graded_c, None, &config)
    );
}

// ============================================================================
// WIRE-FORMAT END TO END
// ============================================================================

#[test]
fn test_scores_open_food_database_payload() {
    let config = ProductScoringConfig::default();

    let scanned: Product = serde_json::from_value(json!({
        "code": "7622210449283",
        "product_name": "Galletas rellenas",
        "nutriscore_grade": "e",
        "nova_group": "4",
        "nutriments": {
            "sugars_100g": "38",
            "saturated-fat_100g": 9.9,
            "salt_100g": 0.74
        },
        "ingredients_text": "harina de trigo, azúcar, aceite de palma, cacao, leche en polvo"
    }))
    .unwrap();

    let prefs = ScoringPreferences {
        excluded_ingredients: vec!["Leche".to_owned()],
        ..ScoringPreferences::default()
    };

    let result = evaluate_product(&scanned, Some(&prefs), &config);
    assert!(result.score < 40.0);
    assert_eq!(result.band, ScoreBand::Poor);
    assert_eq!(result.matched_exclusions, vec!["leche"]);
}

#[test]
fn test_malformed_payload_degrades_to_neutral() {
    let config = ProductScoringConfig::default();

    let scanned: Product = serde_json::from_value(json!({
        "nutriscore_grade": 7,
        "nova_group": { "value": 4 },
        "nutriments": { "sugars_100g": [1, 2, 3] }
    }))
    .unwrap();

    let score = score_product(&scanned, None, &config);
    assert_eq!(score, config.grade_points.unknown);
}
