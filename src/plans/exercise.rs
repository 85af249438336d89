// ABOUTME: Exercise plan template: fitness assessment, weekly routine, and condition modifications
// ABOUTME: Sedentary users get beginner volumes, everyone else the standard volumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{ExerciseLevel, MedicalCondition, UserProfile};
use nutriplan_intelligence::exercise_recommendations;

use super::html::HtmlFragment;

/// Sets per strength exercise
const SETS: u32 = 3;

/// Repetition and duration targets for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingVolume {
    /// Push-up reps per set
    pub push_ups: &'static str,
    /// Squat reps per set
    pub squats: &'static str,
    /// Plank hold per set
    pub plank_seconds: u32,
    /// Walking or jogging duration
    pub cardio_minutes: u32,
    /// Jumping jacks per set
    pub jumping_jacks: u32,
    /// Lunges per leg per set
    pub lunges: &'static str,
    /// Circuit rounds on the full-body day
    pub circuit_rounds: u32,
}

/// Beginner tier
pub const BEGINNER_VOLUME: TrainingVolume = TrainingVolume {
    push_ups: "5-8",
    squats: "8-10",
    plank_seconds: 20,
    cardio_minutes: 20,
    jumping_jacks: 15,
    lunges: "6-8",
    circuit_rounds: 2,
};

/// Standard tier
pub const STANDARD_VOLUME: TrainingVolume = TrainingVolume {
    push_ups: "12-15",
    squats: "15-20",
    plank_seconds: 45,
    cardio_minutes: 30,
    jumping_jacks: 30,
    lunges: "10-12",
    circuit_rounds: 3,
};

/// Volume tier for an exercise level
#[must_use]
pub const fn volume_for(level: ExerciseLevel) -> TrainingVolume {
    match level {
        ExerciseLevel::Sedentary => BEGINNER_VOLUME,
        ExerciseLevel::Light
        | ExerciseLevel::Moderate
        | ExerciseLevel::Heavy
        | ExerciseLevel::VeryHeavy => STANDARD_VOLUME,
    }
}

/// Render the exercise plan fragment for a profile
#[must_use]
pub fn render_exercise_plan(profile: &UserProfile) -> String {
    let v = volume_for(profile.exercise_level);
    let mut html = HtmlFragment::new();

    html.heading("Fitness Assessment")
        .labeled("Current Level", profile.exercise_level.label())
        .labeled("Goal", profile.health_goal.label());

    html.heading("Weekly Exercise Plan");

    html.labeled("Monday", "Upper Body").list([
        format!("Push-ups - {SETS} sets of {} reps", v.push_ups),
        format!("Squats - {SETS} sets of {} reps", v.squats),
        format!("Plank - {SETS} sets of {} seconds", v.plank_seconds),
    ]);

    html.labeled("Tuesday", "Cardio").list([
        format!("Walking/Jogging - {} minutes", v.cardio_minutes),
        format!("Jumping jacks - {SETS} sets of {} reps", v.jumping_jacks),
    ]);

    html.labeled("Wednesday", "Rest/Stretching").list([
        "Full-body stretching - 15 minutes",
        "Light walk if you feel like it",
    ]);

    html.labeled("Thursday", "Lower Body").list([
        format!("Squats - {SETS} sets of {} reps", v.squats),
        format!("Lunges - {SETS} sets of {} reps per leg", v.lunges),
        format!("Glute bridges - {SETS} sets of {} reps", v.squats),
    ]);

    html.labeled("Friday", "Full Body Circuit").list([
        format!(
            "{} rounds: push-ups ({}), squats ({}), jumping jacks ({})",
            v.circuit_rounds, v.push_ups, v.squats, v.jumping_jacks
        ),
        format!("Plank - {} seconds between rounds", v.plank_seconds),
    ]);

    html.labeled("Weekend", "Active recovery").list([
        format!("Easy walk, bike ride or swim - {} minutes", v.cardio_minutes),
        "Yoga or mobility work".to_owned(),
    ]);

    html.paragraph("Always warm up before exercising")
        .paragraph("Stay hydrated");

    if profile.medical_condition != MedicalCondition::None {
        let advice = exercise_recommendations(profile.medical_condition);
        html.heading("Exercise Modifications")
            .labeled("Condition", profile.medical_condition.display_name())
            .labeled_list("Adjustments", advice.exercise_modifications)
            .labeled_list("Notes", advice.special_notes)
            .paragraph("Check with your doctor before starting a new exercise program.");
    }

    html.finish()
}
