// ABOUTME: Health profile model and the enumerations that describe it
// ABOUTME: Gender, ExerciseLevel, HealthGoal, DietaryPreference, MedicalCondition, UserProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Finds the variant whose wire value matches `value` (case-insensitive)
fn parse_variant<T: Copy>(
    variants: &[T],
    value: &str,
    wire: fn(&T) -> &'static str,
    what: &str,
) -> AppResult<T> {
    let normalized = value.trim().to_ascii_lowercase();
    variants
        .iter()
        .copied()
        .find(|variant| wire(variant) == normalized)
        .ok_or_else(|| AppError::invalid_input(format!("Unknown {what}: '{value}'")))
}

/// Gender used for the BMR offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
    /// Other / undisclosed (uses the non-male offset)
    Other,
}

impl Gender {
    /// All variants in display order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Stored wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Self-reported exercise level, keys the TDEE activity factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Heavy exercise 6-7 days/week
    Heavy,
    /// Very heavy exercise or a physical job
    VeryHeavy,
}

impl ExerciseLevel {
    /// All variants in ascending intensity
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Heavy,
        Self::VeryHeavy,
    ];

    /// Stored wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::VeryHeavy => "very_heavy",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::Light => "Light (light exercise 1-3 days/week)",
            Self::Moderate => "Moderate (moderate exercise 3-5 days/week)",
            Self::Heavy => "Heavy (heavy exercise 6-7 days/week)",
            Self::VeryHeavy => "Very Heavy (very heavy exercise, physical job)",
        }
    }
}

/// What the user wants to achieve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Lose weight
    WeightLoss,
    /// Gain weight
    WeightGain,
    /// Gain muscle
    MuscleGain,
    /// Keep current weight
    Maintain,
    /// General wellbeing
    GeneralHealth,
}

impl HealthGoal {
    /// All variants in display order
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::WeightGain,
        Self::MuscleGain,
        Self::Maintain,
        Self::GeneralHealth,
    ];

    /// Stored wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::WeightGain => "weight_gain",
            Self::MuscleGain => "muscle_gain",
            Self::Maintain => "maintain",
            Self::GeneralHealth => "general_health",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintain => "Maintain Weight",
            Self::GeneralHealth => "General Health",
        }
    }
}

/// Dietary preference, drives the meal templates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    /// No animal products
    #[serde(rename = "vegan")]
    Vegan,
    /// No meat or fish
    #[serde(rename = "vegetarian")]
    Vegetarian,
    /// No restriction
    #[serde(rename = "non-vegetarian")]
    NonVegetarian,
}

impl DietaryPreference {
    /// All variants in display order
    pub const ALL: [Self; 3] = [Self::Vegan, Self::Vegetarian, Self::NonVegetarian];

    /// Stored wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::NonVegetarian => "non-vegetarian",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
        }
    }
}

/// Medical condition code, keys the guideline lookup table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    /// No medical condition
    None,
    /// Type 1 diabetes
    #[serde(rename = "diabetes_type1")]
    DiabetesType1,
    /// Type 2 diabetes
    #[serde(rename = "diabetes_type2")]
    DiabetesType2,
    /// High blood pressure
    Hypertension,
    /// Heart disease
    HeartDisease,
    /// High cholesterol
    HighCholesterol,
    /// Thyroid disorders
    Thyroid,
    /// Polycystic ovary syndrome
    Pcos,
    /// Celiac disease
    Celiac,
    /// Lactose intolerance
    LactoseIntolerance,
    /// Food allergies
    FoodAllergies,
    /// Kidney disease
    KidneyDisease,
    /// Liver disease
    LiverDisease,
    /// Arthritis
    Arthritis,
    /// Osteoporosis
    Osteoporosis,
    /// Anemia
    Anemia,
}

impl MedicalCondition {
    /// All variants in display order
    pub const ALL: [Self; 16] = [
        Self::None,
        Self::DiabetesType1,
        Self::DiabetesType2,
        Self::Hypertension,
        Self::HeartDisease,
        Self::HighCholesterol,
        Self::Thyroid,
        Self::Pcos,
        Self::Celiac,
        Self::LactoseIntolerance,
        Self::FoodAllergies,
        Self::KidneyDisease,
        Self::LiverDisease,
        Self::Arthritis,
        Self::Osteoporosis,
        Self::Anemia,
    ];

    /// Stored wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DiabetesType1 => "diabetes_type1",
            Self::DiabetesType2 => "diabetes_type2",
            Self::Hypertension => "hypertension",
            Self::HeartDisease => "heart_disease",
            Self::HighCholesterol => "high_cholesterol",
            Self::Thyroid => "thyroid",
            Self::Pcos => "pcos",
            Self::Celiac => "celiac",
            Self::LactoseIntolerance => "lactose_intolerance",
            Self::FoodAllergies => "food_allergies",
            Self::KidneyDisease => "kidney_disease",
            Self::LiverDisease => "liver_disease",
            Self::Arthritis => "arthritis",
            Self::Osteoporosis => "osteoporosis",
            Self::Anemia => "anemia",
        }
    }

    /// Label shown in selection lists
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::DiabetesType1 => "Diabetes Type 1",
            Self::DiabetesType2 => "Diabetes Type 2",
            Self::Hypertension => "High Blood Pressure (Hypertension)",
            Self::HeartDisease => "Heart Disease",
            Self::HighCholesterol => "High Cholesterol",
            Self::Thyroid => "Thyroid Disorders",
            Self::Pcos => "PCOS (Polycystic Ovary Syndrome)",
            Self::Celiac => "Celiac Disease",
            Self::LactoseIntolerance => "Lactose Intolerance",
            Self::FoodAllergies => "Food Allergies",
            Self::KidneyDisease => "Kidney Disease",
            Self::LiverDisease => "Liver Disease",
            Self::Arthritis => "Arthritis",
            Self::Osteoporosis => "Osteoporosis",
            Self::Anemia => "Anemia",
        }
    }

    /// Name used in plan headings and summaries
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::None => "No Medical Conditions",
            Self::DiabetesType1 => "Type 1 Diabetes",
            Self::DiabetesType2 => "Type 2 Diabetes",
            Self::Hypertension => "High Blood Pressure",
            Self::Pcos => "PCOS",
            Self::HeartDisease
            | Self::HighCholesterol
            | Self::Thyroid
            | Self::Celiac
            | Self::LactoseIntolerance
            | Self::FoodAllergies
            | Self::KidneyDisease
            | Self::LiverDisease
            | Self::Arthritis
            | Self::Osteoporosis
            | Self::Anemia => self.label(),
        }
    }
}

/// Display name for a raw condition code, `"Unknown Condition"` when unrecognized
///
/// Only the exact stored code matches; case and surrounding whitespace are
/// not forgiven here, unlike [`FromStr`].
#[must_use]
pub fn display_name_for_code(code: &str) -> &'static str {
    MedicalCondition::ALL
        .iter()
        .find(|condition| condition.as_str() == code)
        .map_or("Unknown Condition", |condition| condition.display_name())
}

macro_rules! wire_enum_traits {
    ($ty:ty, $what:literal) => {
        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_variant(&Self::ALL, s, Self::as_str, $what)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum_traits!(Gender, "gender");
wire_enum_traits!(ExerciseLevel, "exercise level");
wire_enum_traits!(HealthGoal, "health goal");
wire_enum_traits!(DietaryPreference, "dietary preference");
wire_enum_traits!(MedicalCondition, "medical condition");

/// The user's health profile as persisted under `userProfile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name shown in greetings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Health goal
    pub health_goal: HealthGoal,
    /// Exercise level
    pub exercise_level: ExerciseLevel,
    /// Medical condition code
    #[serde(default = "default_condition")]
    pub medical_condition: MedicalCondition,
}

const fn default_condition() -> MedicalCondition {
    MedicalCondition::None
}

impl UserProfile {
    /// Check every field against the accepted ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first field outside its range
    pub fn validate(&self) -> AppResult<()> {
        if !(limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS).contains(&self.age) {
            return Err(AppError::out_of_range(format!(
                "Please enter a valid age ({}-{})",
                limits::MIN_AGE_YEARS,
                limits::MAX_AGE_YEARS
            )));
        }
        if !self.weight_kg.is_finite()
            || !(limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&self.weight_kg)
        {
            return Err(AppError::out_of_range(format!(
                "Please enter a valid weight ({}-{} kg)",
                limits::MIN_WEIGHT_KG,
                limits::MAX_WEIGHT_KG
            )));
        }
        if !self.height_cm.is_finite()
            || !(limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&self.height_cm)
        {
            return Err(AppError::out_of_range(format!(
                "Please enter a valid height ({}-{} cm)",
                limits::MIN_HEIGHT_CM,
                limits::MAX_HEIGHT_CM
            )));
        }
        Ok(())
    }

    /// Name to greet the user with
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.username.as_deref().unwrap_or("User")
    }
}
