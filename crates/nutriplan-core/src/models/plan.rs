// ABOUTME: Generated plan records for diet and exercise recommendations
// ABOUTME: HTML body plus the derived numeric fields computed when the plan was rendered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    /// Carbohydrates (g)
    #[serde(rename = "carbs")]
    pub carbs_g: u32,
    /// Protein (g)
    #[serde(rename = "protein")]
    pub protein_g: u32,
    /// Fat (g)
    #[serde(rename = "fat")]
    pub fat_g: u32,
}

/// Where a plan's content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Rendered from the static templates
    Template,
}

/// Which of the two plans a record is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Diet plan
    Diet,
    /// Exercise plan
    Exercise,
}

/// Diet plan record persisted under `dietPlan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// HTML fragment
    #[serde(rename = "data")]
    pub html: String,
    /// Basal metabolic rate, rounded (kcal/day)
    pub bmr: u32,
    /// Total daily energy expenditure, rounded (kcal/day)
    pub tdee: u32,
    /// Macronutrient targets
    pub macros: Macros,
    /// Body mass index, one decimal
    pub bmi: f64,
    /// Render time
    #[serde(rename = "timestamp")]
    pub generated_at: DateTime<Utc>,
    /// Content source
    pub source: PlanSource,
}

/// Exercise plan record persisted under `exercisePlan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePlan {
    /// HTML fragment
    #[serde(rename = "data")]
    pub html: String,
    /// Render time
    #[serde(rename = "timestamp")]
    pub generated_at: DateTime<Utc>,
    /// Content source
    pub source: PlanSource,
}
