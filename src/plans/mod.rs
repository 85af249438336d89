// ABOUTME: Plan generation interface and the template-based generator
// ABOUTME: Produces diet and exercise plan records from a health profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generation
//!
//! [`PlanGenerator`] is the seam between the application state and whatever
//! produces plan content. [`TemplatePlanGenerator`] renders both plans from
//! static templates driven by the nutrition calculator.

/// Diet plan template
pub mod diet;
/// Exercise plan template
pub mod exercise;
/// HTML fragment builder and document wrapper
pub mod html;

use async_trait::async_trait;
use chrono::Utc;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{DietPlan, ExercisePlan, PlanSource, UserProfile};
use nutriplan_intelligence::nutrition_calculator::{round_one_decimal, round_to_u32};
use nutriplan_intelligence::{calculate_daily_nutrition, IntelligenceConfig, NutritionConfig};

use crate::logging::AppLogger;

pub use html::render_document;

/// Produces plan records for a profile
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generator name used in logs
    fn name(&self) -> &'static str;

    /// Build a diet plan
    async fn diet_plan(&self, profile: &UserProfile) -> AppResult<DietPlan>;

    /// Build an exercise plan
    async fn exercise_plan(&self, profile: &UserProfile) -> AppResult<ExercisePlan>;
}

/// Renders plans from the built-in templates
#[derive(Debug, Clone)]
pub struct TemplatePlanGenerator {
    config: NutritionConfig,
}

impl Default for TemplatePlanGenerator {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global().nutrition.clone())
    }
}

impl TemplatePlanGenerator {
    /// Generator using the given formula configuration
    #[must_use]
    pub fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Render the diet plan without going through the async interface
    ///
    /// # Errors
    ///
    /// Returns an error if the profile fails validation
    pub fn render_diet(&self, profile: &UserProfile) -> AppResult<DietPlan> {
        profile.validate()?;
        let needs = calculate_daily_nutrition(profile, &self.config)?;

        let plan = DietPlan {
            html: diet::render_diet_plan(profile, &needs),
            bmr: round_to_u32(needs.bmr),
            tdee: round_to_u32(needs.tdee),
            macros: needs.macros,
            bmi: round_one_decimal(needs.bmi),
            generated_at: Utc::now(),
            source: PlanSource::Template,
        };
        AppLogger::log_plan_generated("diet", self.name(), Some(plan.tdee));
        Ok(plan)
    }

    /// Render the exercise plan without going through the async interface
    ///
    /// # Errors
    ///
    /// Returns an error if the profile fails validation
    pub fn render_exercise(&self, profile: &UserProfile) -> AppResult<ExercisePlan> {
        profile.validate()?;

        let plan = ExercisePlan {
            html: exercise::render_exercise_plan(profile),
            generated_at: Utc::now(),
            source: PlanSource::Template,
        };
        AppLogger::log_plan_generated("exercise", self.name(), None);
        Ok(plan)
    }
}

#[async_trait]
impl PlanGenerator for TemplatePlanGenerator {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn diet_plan(&self, profile: &UserProfile) -> AppResult<DietPlan> {
        self.render_diet(profile)
    }

    async fn exercise_plan(&self, profile: &UserProfile) -> AppResult<ExercisePlan> {
        self.render_exercise(profile)
    }
}
