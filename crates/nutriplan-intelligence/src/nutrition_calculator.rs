// ABOUTME: Nutrition calculation algorithms using closed-form formulas
// ABOUTME: BMR (Mifflin-St Jeor), TDEE, fixed-ratio macro split, and BMI classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Pure functions over numeric inputs. Each formula takes its coefficients from
//! [`NutritionConfig`] so the constants live in one place.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use std::fmt;

use nutriplan_core::constants::nutrition::{
    CM_PER_METER, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{ExerciseLevel, Gender, Macros, UserProfile};
use serde::{Deserialize, Serialize};

use crate::config::{
    ActivityFactorsConfig, BmiThresholds, BmrConfig, MacroSplitConfig, NutritionConfig,
};

/// BMI category buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    NormalWeight,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Bucket a BMI value using the configured thresholds
    #[must_use]
    pub fn from_bmi(bmi: f64, thresholds: &BmiThresholds) -> Self {
        if bmi < thresholds.underweight_below {
            Self::Underweight
        } else if bmi < thresholds.normal_below {
            Self::NormalWeight
        } else if bmi < thresholds.overweight_below {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete daily energy calculation for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNutritionNeeds {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Macro split of the TDEE in whole grams
    pub macros: Macros,
    /// Body Mass Index
    pub bmi: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Activity level used for the TDEE
    pub exercise_level: ExerciseLevel,
}

impl DailyNutritionNeeds {
    /// TDEE rounded to whole kilocalories
    #[must_use]
    pub fn daily_calories(&self) -> u32 {
        round_to_u32(self.tdee)
    }

    /// BMI rounded to one decimal
    #[must_use]
    pub fn bmi_rounded(&self) -> f64 {
        round_one_decimal(self.bmi)
    }
}

fn ensure_positive(value: f64, what: &str) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{what} must be a positive number"
        )))
    }
}

/// Round to the nearest whole number, saturating at the `u32` bounds
#[must_use]
pub fn round_to_u32(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Round to one decimal place
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Everyone else: -161
///
/// # Errors
///
/// Returns an error if weight or height is not a positive finite number
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    ensure_positive(weight_kg, "Weight")?;
    ensure_positive(height_cm, "Height")?;

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + gender_constant)
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
    level: ExerciseLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    ensure_positive(bmr, "BMR")?;

    let activity_factor = match level {
        ExerciseLevel::Sedentary => config.sedentary,
        ExerciseLevel::Light => config.light,
        ExerciseLevel::Moderate => config.moderate,
        ExerciseLevel::Heavy => config.heavy,
        ExerciseLevel::VeryHeavy => config.very_heavy,
    };

    Ok(bmr * activity_factor)
}

/// Split a daily energy target into whole grams of carbs, protein and fat
///
/// Formula: grams = round(TDEE x fraction / kcal-per-gram), with 4 kcal/g for
/// carbohydrate and protein and 9 kcal/g for fat.
///
/// # Errors
///
/// Returns an error if TDEE is not positive
pub fn calculate_macros(tdee: f64, config: &MacroSplitConfig) -> AppResult<Macros> {
    ensure_positive(tdee, "TDEE")?;

    Ok(Macros {
        carbs_g: round_to_u32(tdee * config.carbs_fraction / KCAL_PER_GRAM_CARBS),
        protein_g: round_to_u32(tdee * config.protein_fraction / KCAL_PER_GRAM_PROTEIN),
        fat_g: round_to_u32(tdee * config.fat_fraction / KCAL_PER_GRAM_FAT),
    })
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_m` ^ 2)
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    ensure_positive(weight_kg, "Weight")?;
    ensure_positive(height_cm, "Height")?;

    let height_m = height_cm / CM_PER_METER;
    Ok(weight_kg / (height_m * height_m))
}

/// Run every formula for a profile
///
/// # Errors
///
/// Returns an error if any formula rejects the profile's values
pub fn calculate_daily_nutrition(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> AppResult<DailyNutritionNeeds> {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.exercise_level, &config.activity_factors)?;
    let macros = calculate_macros(tdee, &config.macro_split)?;
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;

    Ok(DailyNutritionNeeds {
        bmr,
        tdee,
        macros,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi, &config.bmi),
        exercise_level: profile.exercise_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_rejects_non_finite_input() {
        let config = BmrConfig::default();
        assert!(calculate_mifflin_st_jeor(f64::NAN, 175.0, 30, Gender::Male, &config).is_err());
        assert!(calculate_mifflin_st_jeor(70.0, 0.0, 30, Gender::Male, &config).is_err());
    }

    #[test]
    fn test_other_gender_uses_non_male_offset() {
        let config = BmrConfig::default();
        let female = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Female, &config).unwrap();
        let other = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Other, &config).unwrap();
        assert!((female - other).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_helpers() {
        assert_eq!(round_to_u32(129.7), 130);
        assert_eq!(round_to_u32(-5.0), 0);
        assert!((round_one_decimal(22.857) - 22.9).abs() < 1e-9);
    }
}
