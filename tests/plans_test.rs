// ABOUTME: Integration tests for the template plan generator
// ABOUTME: Checks rendered diet and exercise content, medical sections, and the exported document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use nutriplan::plans::{render_document, PlanGenerator, TemplatePlanGenerator};
use nutriplan_core::errors::ErrorCode;
use nutriplan_core::models::{
    DietaryPreference, ExerciseLevel, HealthGoal, MedicalCondition, PlanSource,
};

fn generator() -> TemplatePlanGenerator {
    common::init_test_logging();
    TemplatePlanGenerator::default()
}

#[test]
fn test_diet_plan_health_summary() -> Result<()> {
    let plan = generator().render_diet(&common::sample_profile())?;

    assert_eq!(plan.source, PlanSource::Template);
    assert_eq!(plan.bmr, 1649);
    assert_eq!(plan.tdee, 2556);
    assert_eq!(plan.macros.protein_g, 128);

    let html = &plan.html;
    assert!(html.contains("<h3>Health Summary</h3>"));
    assert!(html.contains("<p><strong>BMI:</strong> 22.9 (Normal weight)</p>"));
    assert!(html.contains("<p><strong>Daily Calories:</strong> 2556 kcal for Maintain Weight</p>"));
    assert!(html.contains("128g protein, 319g carbs, 85g fat"));
    assert!(html.contains("Drink 8-10 glasses of water daily"));
    Ok(())
}

#[test]
fn test_diet_plan_covers_the_whole_week() -> Result<()> {
    let plan = generator().render_diet(&common::sample_profile())?;

    for day in [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ] {
        assert!(
            plan.html.contains(&format!("<strong>{day}:</strong>")),
            "missing {day}"
        );
    }
    assert!(plan.html.contains("<p><strong>Monday:</strong> Power Start</p>"));
    assert!(plan.html.contains("Breakfast: Oatmeal with berries (639 cal)"));
    assert!(plan.html.contains("Lunch: Grilled chicken salad (895 cal)"));
    assert!(plan.html.contains("Dinner: Salmon with quinoa (767 cal)"));
    assert!(plan.html.contains("(256 cal)"));
    Ok(())
}

#[test]
fn test_diet_type_follows_preference() -> Result<()> {
    let generator = generator();
    let mut profile = common::sample_profile();

    let expected = [
        (DietaryPreference::NonVegetarian, "Weekly Balanced Diet Plan", "Grilled chicken salad"),
        (DietaryPreference::Vegetarian, "Weekly Vegetarian Diet Plan", "Grilled paneer salad"),
        (DietaryPreference::Vegan, "Weekly Plant-based Diet Plan", "Grilled tofu salad"),
    ];
    for (preference, title, monday_lunch) in expected {
        profile.dietary_preference = preference;
        let html = generator.render_diet(&profile)?.html;
        assert!(html.contains(title), "{preference}: {html}");
        assert!(html.contains(monday_lunch), "{preference}");
    }

    profile.dietary_preference = DietaryPreference::Vegetarian;
    let html = generator.render_diet(&profile)?.html.to_lowercase();
    assert!(!html.contains("chicken"));
    assert!(!html.contains("salmon"));
    Ok(())
}

#[test]
fn test_goal_label_in_calorie_line() -> Result<()> {
    let mut profile = common::sample_profile();
    profile.health_goal = HealthGoal::WeightLoss;

    let html = generator().render_diet(&profile)?.html;
    assert!(html.contains("kcal for Weight Loss"));
    Ok(())
}

#[test]
fn test_medical_section_only_with_condition() -> Result<()> {
    let generator = generator();
    let mut profile = common::sample_profile();

    let html = generator.render_diet(&profile)?.html;
    assert!(!html.contains("Medical Considerations"));
    let html = generator.render_exercise(&profile)?.html;
    assert!(!html.contains("Exercise Modifications"));

    profile.medical_condition = MedicalCondition::DiabetesType2;
    let html = generator.render_diet(&profile)?.html;
    assert!(html.contains("<h3>Medical Considerations</h3>"));
    assert!(html.contains("<p><strong>Condition:</strong> Type 2 Diabetes</p>"));
    assert!(html.contains("Limit refined carbohydrates and sugars"));
    assert!(html.contains("<p><strong>Foods to Avoid:</strong></p>"));

    let html = generator.render_exercise(&profile)?.html;
    assert!(html.contains("<h3>Exercise Modifications</h3>"));
    assert!(html.contains("Aim for 150 minutes of moderate exercise per week"));
    Ok(())
}

#[test]
fn test_condition_without_guidelines_renders_only_heading() -> Result<()> {
    let mut profile = common::sample_profile();
    profile.medical_condition = MedicalCondition::Osteoporosis;

    let html = generator().render_diet(&profile)?.html;
    assert!(html.contains("<p><strong>Condition:</strong> Osteoporosis</p>"));
    assert!(!html.contains("Dietary Restrictions"));
    assert!(!html.contains("<ul>\n</ul>"));
    Ok(())
}

#[test]
fn test_exercise_volume_by_level() -> Result<()> {
    let generator = generator();
    let mut profile = common::sample_profile();

    profile.exercise_level = ExerciseLevel::Sedentary;
    let beginner = generator.render_exercise(&profile)?.html;
    assert!(beginner.contains("<p><strong>Current Level:</strong> Sedentary (little or no exercise)</p>"));
    assert!(beginner.contains("Push-ups - 3 sets of 5-8 reps"));
    assert!(beginner.contains("Plank - 3 sets of 20 seconds"));
    assert!(beginner.contains("Walking/Jogging - 20 minutes"));

    profile.exercise_level = ExerciseLevel::Light;
    let standard = generator.render_exercise(&profile)?.html;
    assert!(standard.contains("Push-ups - 3 sets of 12-15 reps"));
    assert!(standard.contains("Walking/Jogging - 30 minutes"));
    assert!(standard.contains("3 rounds: push-ups (12-15)"));
    Ok(())
}

#[test]
fn test_exercise_week_structure() -> Result<()> {
    let html = generator().render_exercise(&common::sample_profile())?.html;

    assert!(html.contains("<h3>Fitness Assessment</h3>"));
    assert!(html.contains("<p><strong>Goal:</strong> Maintain Weight</p>"));
    for (day, focus) in [
        ("Monday", "Upper Body"),
        ("Tuesday", "Cardio"),
        ("Wednesday", "Rest/Stretching"),
        ("Thursday", "Lower Body"),
        ("Friday", "Full Body Circuit"),
        ("Weekend", "Active recovery"),
    ] {
        assert!(html.contains(&format!("<p><strong>{day}:</strong> {focus}</p>")));
    }
    assert!(html.contains("<p>Always warm up before exercising</p>"));
    assert!(html.contains("<p>Stay hydrated</p>"));
    Ok(())
}

#[test]
fn test_invalid_profile_is_rejected() {
    let mut profile = common::sample_profile();
    profile.height_cm = 20.0;

    let error = generator().render_diet(&profile).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(generator().render_exercise(&profile).is_err());
}

#[tokio::test]
async fn test_trait_interface_matches_direct_rendering() -> Result<()> {
    let generator = generator();
    let profile = common::sample_profile();

    let via_trait = generator.diet_plan(&profile).await?;
    let direct = generator.render_diet(&profile)?;
    assert_eq!(via_trait.html, direct.html);
    assert_eq!(generator.name(), "template");
    Ok(())
}

#[test]
fn test_render_document_wraps_fragment() -> Result<()> {
    let plan = generator().render_exercise(&common::sample_profile())?;
    let document = render_document(&plan.html);

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<meta charset=\"utf-8\">"));
    assert!(document.contains("<style>"));
    assert!(document.contains(&plan.html));
    assert!(document.trim_end().ends_with("</html>"));
    Ok(())
}
