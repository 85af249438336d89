// ABOUTME: Nutrition configuration for the calorie and macro calculators
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, macro split, and BMI thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - BMI categories: WHO Technical Report Series 894 (2000)

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition Calculation Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Share of TDEE assigned to each macronutrient
    pub macro_split: MacroSplitConfig,
    /// BMI category thresholds
    pub bmi: BmiThresholds,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
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
    /// Mifflin-St Jeor constant for everyone else (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Heavy (6-7 days/week): 1.725
    pub heavy: f64,
    /// Very heavy (physical job or twice-daily training): 1.9
    pub very_heavy: f64,
}

/// Fraction of daily energy assigned to each macronutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Carbohydrate share of TDEE (0.5)
    pub carbs_fraction: f64,
    /// Protein share of TDEE (0.2)
    pub protein_fraction: f64,
    /// Fat share of TDEE (0.3)
    pub fat_fraction: f64,
}

/// Upper bounds (exclusive) of the BMI categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Below this value: underweight (18.5)
    pub underweight_below: f64,
    /// Below this value: normal weight (25.0)
    pub normal_below: f64,
    /// Below this value: overweight, otherwise obese (30.0)
    pub overweight_below: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            heavy: 1.725,
            very_heavy: 1.9,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            carbs_fraction: 0.5,
            protein_fraction: 0.2,
            fat_fraction: 0.3,
        }
    }
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            normal_below: 25.0,
            overweight_below: 30.0,
        }
    }
}

impl NutritionConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the macro split does not sum to 1.0, activity factors
    /// are not strictly increasing, or BMI thresholds are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.macro_split.validate()?;
        self.activity_factors.validate()?;
        self.bmi.validate()
    }
}

impl MacroSplitConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            ("carbs", self.carbs_fraction),
            ("protein", self.protein_fraction),
            ("fat", self.fat_fraction),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} fraction must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let sum = self.carbs_fraction + self.protein_fraction + self.fat_fraction;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights(format!(
                "macro fractions must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl ActivityFactorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.light,
            self.moderate,
            self.heavy,
            self.very_heavy,
        ];
        if factors[0] < 1.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "sedentary factor must be at least 1.0, got {}",
                factors[0]
            )));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must increase with exercise level".to_owned(),
            ));
        }
        Ok(())
    }
}

impl BmiThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0 < self.underweight_below
            && self.underweight_below < self.normal_below
            && self.normal_below < self.overweight_below)
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMI thresholds must be positive and increasing".to_owned(),
            ));
        }
        Ok(())
    }
}
