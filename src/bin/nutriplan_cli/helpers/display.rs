// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Consistent display of profiles, daily needs, plans, progress, and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use html_escape::decode_html_entities;
use nutriplan_core::models::{DietPlan, ExercisePlan, NotificationSettings, UserProfile};
use nutriplan_intelligence::{DailyNutritionNeeds, MonthlyProgress};

const RULE_WIDTH: usize = 50;

fn rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Display a health profile
pub fn display_profile(profile: &UserProfile) {
    println!("\nHealth profile for {}", profile.greeting_name());
    rule();
    println!("   Age: {} years", profile.age);
    println!("   Gender: {}", profile.gender.label());
    println!("   Weight: {} kg", profile.weight_kg);
    println!("   Height: {} cm", profile.height_cm);
    println!("   Diet: {}", profile.dietary_preference.label());
    println!("   Goal: {}", profile.health_goal.label());
    println!("   Activity: {}", profile.exercise_level.label());
    println!(
        "   Medical condition: {}",
        profile.medical_condition.display_name()
    );
}

/// Display the computed daily needs
pub fn display_needs(needs: &DailyNutritionNeeds) {
    println!("\nDaily needs");
    rule();
    println!("   BMR: {} kcal", needs.bmr.round());
    println!("   TDEE: {} kcal", needs.daily_calories());
    println!(
        "   Macros: {}g carbs, {}g protein, {}g fat",
        needs.macros.carbs_g, needs.macros.protein_g, needs.macros.fat_g
    );
    println!("   BMI: {:.1} ({})", needs.bmi_rounded(), needs.bmi_category);
}

/// Display the header of a stored diet plan
pub fn display_diet_summary(plan: &DietPlan) {
    println!("\nDiet plan");
    rule();
    println!("   BMR: {} kcal", plan.bmr);
    println!("   TDEE: {} kcal", plan.tdee);
    println!(
        "   Macros: {}g carbs, {}g protein, {}g fat",
        plan.macros.carbs_g, plan.macros.protein_g, plan.macros.fat_g
    );
    println!("   BMI: {:.1}", plan.bmi);
    println!(
        "   Generated: {}",
        plan.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
}

/// Display the header of a stored exercise plan
pub fn display_exercise_summary(plan: &ExercisePlan) {
    println!("\nExercise plan");
    rule();
    println!(
        "   Generated: {}",
        plan.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
}

/// Display a month of progress
pub fn display_month(summary: &MonthlyProgress, streak: u32) {
    println!("\nProgress for {:04}-{:02}", summary.year, summary.month);
    rule();
    println!("   Followed: {}", summary.followed);
    println!("   Partially followed: {}", summary.partially_followed);
    println!("   Not followed: {}", summary.not_followed);
    println!("   Tracked days: {}", summary.total);
    println!("   Adherence: {}%", summary.adherence_percent());
    println!("   Current streak: {streak} day(s)");
}

/// Display reminder preferences
pub fn display_notifications(settings: &NotificationSettings) {
    println!("\nNotifications");
    rule();
    println!("   Enabled: {}", on_off(settings.enabled));
    println!(
        "   Meal reminders: {}",
        on_off(settings.meal_reminders_active())
    );
    println!(
        "   Exercise reminders: {}",
        on_off(settings.exercise_reminders_active())
    );
}

/// Plain-text rendering of a plan fragment for the terminal
pub fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut tag = String::new();

    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                match tag.trim_start_matches('/') {
                    "h3" if !tag.starts_with('/') => text.push('\n'),
                    "li" if !tag.starts_with('/') => text.push_str("  - "),
                    _ => {}
                }
            }
            _ if in_tag => tag.push(ch),
            _ => text.push(ch),
        }
    }

    decode_html_entities(&text)
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text() {
        let html = "<h3>Plan</h3>\n<p><strong>Goal:</strong> Stay &amp; grow</p>\n<ul>\n  <li>Walk</li>\n</ul>\n";
        assert_eq!(html_to_text(html), "Plan\nGoal: Stay & grow\n    - Walk");
    }
}
