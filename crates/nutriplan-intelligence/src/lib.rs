// ABOUTME: Nutrition and health calculation engine for nutriplan
// ABOUTME: Re-exports calculator, medical guideline, and progress analysis modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Intelligence
//!
//! Pure calculation code: no storage, no I/O. Everything here is a total
//! function of its inputs plus the configuration in [`config`].

/// Calculator configuration (formula coefficients, thresholds)
pub mod config;

/// Medical condition guideline lookup table
pub mod medical;

/// BMR, TDEE, macro split and BMI formulas
pub mod nutrition_calculator;

/// Adherence statistics over tracked days
pub mod progress_analysis;

pub use config::{IntelligenceConfig, NutritionConfig};
pub use medical::{
    dietary_recommendations, exercise_recommendations, guidelines_for, ConditionGuidelines,
    DietaryRecommendations, ExerciseRecommendations,
};
pub use nutrition_calculator::{
    calculate_bmi, calculate_daily_nutrition, calculate_macros, calculate_mifflin_st_jeor,
    calculate_tdee, BmiCategory, DailyNutritionNeeds,
};
pub use progress_analysis::{current_streak, MonthlyProgress};
