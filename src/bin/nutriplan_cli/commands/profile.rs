// ABOUTME: Profile commands for nutriplan-cli
// ABOUTME: Handles setting and showing the health profile, and the standalone BMI check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::context::AppContext;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::UserProfile;
use nutriplan_intelligence::nutrition_calculator::round_one_decimal;
use nutriplan_intelligence::{calculate_bmi, calculate_daily_nutrition, BmiCategory, IntelligenceConfig};

use crate::helpers::display::{display_needs, display_profile};
use crate::helpers::session::require_session;

type Result<T> = AppResult<T>;

/// Create or replace the health profile
pub async fn set(context: &mut AppContext, profile: UserProfile) -> Result<()> {
    require_session(context)?;
    let saved = context.update_profile(profile).await?;

    println!("\nProfile saved.");
    display_profile(&saved);
    let needs = calculate_daily_nutrition(&saved, &IntelligenceConfig::global().nutrition)?;
    display_needs(&needs);
    println!("\nGenerate your plans with `nutriplan-cli plan generate`.");
    Ok(())
}

/// Show the profile and the computed daily needs
pub fn show(context: &AppContext) -> Result<()> {
    require_session(context)?;
    let profile = context.current_profile()?;
    display_profile(profile);
    let needs = calculate_daily_nutrition(profile, &IntelligenceConfig::global().nutrition)?;
    display_needs(&needs);
    Ok(())
}

/// Compute and print BMI
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<()> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(AppError::invalid_input(
            "Weight and height must be positive numbers",
        ));
    }
    let value = calculate_bmi(weight_kg, height_cm)?;
    let category = BmiCategory::from_bmi(value, &IntelligenceConfig::global().nutrition.bmi);
    println!("BMI: {:.1} ({category})", round_one_decimal(value));
    Ok(())
}
