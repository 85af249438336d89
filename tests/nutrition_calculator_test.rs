// ABOUTME: Integration tests for the nutrition calculator
// ABOUTME: Checks BMR, TDEE, macro split, and BMI values against worked examples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutriplan_core::errors::ErrorCode;
use nutriplan_core::models::{ExerciseLevel, Gender, Macros};
use nutriplan_intelligence::config::{ActivityFactorsConfig, BmiThresholds, BmrConfig, MacroSplitConfig};
use nutriplan_intelligence::{
    calculate_bmi, calculate_daily_nutrition, calculate_macros, calculate_mifflin_st_jeor,
    calculate_tdee, BmiCategory, NutritionConfig,
};

const EPSILON: f64 = 1e-9;

#[test]
fn test_bmr_male_reference_values() {
    let bmr = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Male, &BmrConfig::default())
        .unwrap();
    // 700 + 1093.75 - 150 + 5
    assert!((bmr - 1648.75).abs() < EPSILON, "got {bmr}");
}

#[test]
fn test_bmr_female_offset() {
    let bmr = calculate_mifflin_st_jeor(70.0, 175.0, 30, Gender::Female, &BmrConfig::default())
        .unwrap();
    // 700 + 1093.75 - 150 - 161
    assert!((bmr - 1482.75).abs() < EPSILON, "got {bmr}");
}

#[test]
fn test_bmr_is_not_clamped() {
    let bmr = calculate_mifflin_st_jeor(20.0, 100.0, 120, Gender::Female, &BmrConfig::default())
        .unwrap();
    // 200 + 625 - 600 - 161
    assert!((bmr - 64.0).abs() < EPSILON, "got {bmr}");
}

#[test]
fn test_tdee_activity_factors() {
    let factors = ActivityFactorsConfig::default();
    let bmr = 1673.75;

    let expected = [
        (ExerciseLevel::Sedentary, 1.2),
        (ExerciseLevel::Light, 1.375),
        (ExerciseLevel::Moderate, 1.55),
        (ExerciseLevel::Heavy, 1.725),
        (ExerciseLevel::VeryHeavy, 1.9),
    ];
    for (level, factor) in expected {
        let tdee = calculate_tdee(bmr, level, &factors).unwrap();
        assert!((tdee - bmr * factor).abs() < 1e-6, "{level}: {tdee}");
    }

    let moderate = calculate_tdee(bmr, ExerciseLevel::Moderate, &factors).unwrap();
    assert!((moderate - 2594.3125).abs() < 1e-6);
}

#[test]
fn test_macro_split_reference_values() {
    let macros = calculate_macros(2594.3125, &MacroSplitConfig::default()).unwrap();
    assert_eq!(
        macros,
        Macros {
            carbs_g: 324,
            protein_g: 130,
            fat_g: 86,
        }
    );
}

#[test]
fn test_bmi_and_category() {
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert!((bmi - 22.857_142_857).abs() < 1e-6);

    let thresholds = BmiThresholds::default();
    assert_eq!(BmiCategory::from_bmi(bmi, &thresholds), BmiCategory::NormalWeight);
    assert_eq!(BmiCategory::from_bmi(bmi, &thresholds).label(), "Normal weight");
}

#[test]
fn test_bmi_category_boundaries() {
    let thresholds = BmiThresholds::default();
    assert_eq!(BmiCategory::from_bmi(18.4, &thresholds), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5, &thresholds), BmiCategory::NormalWeight);
    assert_eq!(BmiCategory::from_bmi(24.99, &thresholds), BmiCategory::NormalWeight);
    assert_eq!(BmiCategory::from_bmi(25.0, &thresholds), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(29.9, &thresholds), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0, &thresholds), BmiCategory::Obese);
}

#[test]
fn test_daily_nutrition_for_profile() {
    let needs = calculate_daily_nutrition(&common::sample_profile(), &NutritionConfig::default())
        .unwrap();

    assert!((needs.bmr - 1648.75).abs() < EPSILON);
    assert!((needs.tdee - 2555.5625).abs() < 1e-6);
    assert_eq!(needs.daily_calories(), 2556);
    assert_eq!(needs.macros.carbs_g, 319);
    assert_eq!(needs.macros.protein_g, 128);
    assert_eq!(needs.macros.fat_g, 85);
    assert!((needs.bmi_rounded() - 22.9).abs() < EPSILON);
    assert_eq!(needs.bmi_category.to_string(), "Normal weight");
}

#[test]
fn test_invalid_inputs_rejected() {
    let bmr_config = BmrConfig::default();
    let error = calculate_mifflin_st_jeor(-1.0, 175.0, 30, Gender::Male, &bmr_config).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    assert!(calculate_tdee(0.0, ExerciseLevel::Light, &ActivityFactorsConfig::default()).is_err());
    assert!(calculate_macros(f64::INFINITY, &MacroSplitConfig::default()).is_err());
    assert!(calculate_bmi(70.0, 0.0).is_err());
}

#[test]
fn test_default_config_is_valid() {
    assert!(NutritionConfig::default().validate().is_ok());
}
