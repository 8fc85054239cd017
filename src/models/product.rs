// ABOUTME: Product nutritional declaration models matching the open food database wire format
// ABOUTME: NutriScoreGrade, NovaGroup, Nutrients, and Product with lenient deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nutri-Score letter grade summarizing a packaged food's nutritional quality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NutriScoreGrade {
    /// Best nutritional quality
    A,
    /// Good nutritional quality
    B,
    /// Average nutritional quality
    C,
    /// Below-average nutritional quality
    D,
    /// Worst nutritional quality
    E,
}

impl NutriScoreGrade {
    /// Parse a grade from its wire representation, case-insensitively.
    ///
    /// The open food database reports unknown grades as strings like
    /// `"unknown"` or `"not-applicable"`; those map to `None` so the scorer
    /// falls back to its neutral base value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            "e" => Some(Self::E),
            _ => None,
        }
    }
}

/// NOVA classification of food processing level
///
/// Group 1 is unprocessed or minimally processed food, group 4 is
/// ultra-processed. Ordering follows processing level, so
/// `NovaGroup::Processed > NovaGroup::Unprocessed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum NovaGroup {
    /// Group 1: unprocessed or minimally processed foods
    Unprocessed,
    /// Group 2: processed culinary ingredients (oils, butter, sugar, salt)
    CulinaryIngredients,
    /// Group 3: processed foods (canned vegetables, cheeses, fresh bread)
    Processed,
    /// Group 4: ultra-processed food and drink products
    UltraProcessed,
}

impl NovaGroup {
    /// The numeric NOVA group (1-4)
    #[must_use]
    pub const fn group(self) -> u8 {
        match self {
            Self::Unprocessed => 1,
            Self::CulinaryIngredients => 2,
            Self::Processed => 3,
            Self::UltraProcessed => 4,
        }
    }

    /// Build from the numeric NOVA group, `None` outside 1-4
    #[must_use]
    pub const fn from_group(group: u8) -> Option<Self> {
        match group {
            1 => Some(Self::Unprocessed),
            2 => Some(Self::CulinaryIngredients),
            3 => Some(Self::Processed),
            4 => Some(Self::UltraProcessed),
            _ => None,
        }
    }

    /// How many processing steps this group sits above group 1
    #[must_use]
    pub const fn steps_above_unprocessed(self) -> u8 {
        self.group() - 1
    }
}

impl From<NovaGroup> for u8 {
    fn from(group: NovaGroup) -> Self {
        group.group()
    }
}

impl TryFrom<u8> for NovaGroup {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_group(value).ok_or_else(|| format!("invalid NOVA group: {value}"))
    }
}

/// Per-100g nutrient declaration, keyed the way the open food database
/// reports it under `nutriments`
///
/// Absent, non-numeric, negative, or non-finite values deserialize to `None`
/// and contribute nothing to scoring.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Nutrients {
    /// Sugars in grams per 100g of product
    #[serde(
        default,
        rename = "sugars_100g",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub sugars_per_100g: Option<f64>,

    /// Saturated fat in grams per 100g of product
    #[serde(
        default,
        rename = "saturated-fat_100g",
        alias = "saturated_fat_100g",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub saturated_fat_per_100g: Option<f64>,

    /// Salt in grams per 100g of product
    #[serde(
        default,
        rename = "salt_100g",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub salt_per_100g: Option<f64>,
}

/// A food product's nutritional declaration as fetched from the open food
/// database by the scanner flow
///
/// Every field except the product value itself is optional; the scorer treats
/// missing data as neutral rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    /// Product barcode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Display name
    #[serde(
        default,
        rename = "product_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Nutri-Score grade, absent when the database has not computed one
    #[serde(
        default,
        rename = "nutriscore_grade",
        deserialize_with = "lenient_grade",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutri_score_grade: Option<NutriScoreGrade>,

    /// NOVA processing group, absent when unclassified
    #[serde(
        default,
        rename = "nova_group",
        deserialize_with = "lenient_nova",
        skip_serializing_if = "Option::is_none"
    )]
    pub nova_group: Option<NovaGroup>,

    /// Per-100g nutrient declaration
    #[serde(default, rename = "nutriments")]
    pub nutrients: Nutrients,

    /// Free-form ingredient list, comma/space separated, locale-dependent casing
    #[serde(
        default,
        rename = "ingredients_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub ingredients_text: Option<String>,
}

/// Deserialize a grade string, mapping junk types and unknown grades to `None`
fn lenient_grade<'de, D>(deserializer: D) -> Result<Option<NutriScoreGrade>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(NutriScoreGrade::parse))
}

/// Deserialize a NOVA group reported as an integer or numeric string,
/// mapping junk types and out-of-range groups to `None`
fn lenient_nova<'de, D>(deserializer: D) -> Result<Option<NovaGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let group = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(group
        .and_then(|g| u8::try_from(g).ok())
        .and_then(NovaGroup::from_group))
}

/// Deserialize a nutrient quantity reported as a number or numeric string,
/// mapping junk types, negative, and non-finite values to `None`
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let quantity = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(quantity.filter(|q| q.is_finite() && *q >= 0.0))
}
