// ABOUTME: Integration tests for the medical condition guideline lookup
// ABOUTME: Covers table coverage, empty entries, and display names for condition codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan_core::models::{display_name_for_code, MedicalCondition};
use nutriplan_intelligence::{dietary_recommendations, exercise_recommendations, guidelines_for};

const WITHOUT_ENTRY: [MedicalCondition; 4] = [
    MedicalCondition::None,
    MedicalCondition::FoodAllergies,
    MedicalCondition::LiverDisease,
    MedicalCondition::Osteoporosis,
];

#[test]
fn test_twelve_conditions_have_guidelines() {
    let with_entry: Vec<_> = MedicalCondition::ALL
        .into_iter()
        .filter(|condition| !guidelines_for(*condition).is_empty())
        .collect();

    assert_eq!(with_entry.len(), 12);
    for condition in with_entry {
        let guidelines = guidelines_for(condition);
        assert!(!guidelines.dietary_restrictions.is_empty(), "{condition}");
        assert!(!guidelines.recommended_foods.is_empty(), "{condition}");
        assert!(!guidelines.avoid_foods.is_empty(), "{condition}");
        assert!(!guidelines.exercise_modifications.is_empty(), "{condition}");
        assert!(!guidelines.special_notes.is_empty(), "{condition}");
    }
}

#[test]
fn test_conditions_without_entry_resolve_to_empty_advice() {
    for condition in WITHOUT_ENTRY {
        assert!(guidelines_for(condition).is_empty(), "{condition}");

        let diet = dietary_recommendations(condition);
        assert_eq!(diet.condition, condition);
        assert!(diet.dietary_restrictions.is_empty());
        assert!(diet.recommended_foods.is_empty());

        let exercise = exercise_recommendations(condition);
        assert!(exercise.exercise_modifications.is_empty());
    }
}

#[test]
fn test_type1_diabetes_advice() {
    let diet = dietary_recommendations(MedicalCondition::DiabetesType1);
    assert_eq!(
        diet.dietary_restrictions[0],
        "Monitor carbohydrate intake carefully"
    );
    assert!(diet
        .avoid_foods
        .contains(&"Sugary drinks and sodas"));

    let exercise = exercise_recommendations(MedicalCondition::DiabetesType1);
    assert_eq!(
        exercise.exercise_modifications[0],
        "Check blood glucose before, during, and after exercise"
    );
    assert_eq!(exercise.special_notes, diet.special_notes);
}

#[test]
fn test_subsets_share_the_underlying_entry() {
    for condition in MedicalCondition::ALL {
        let guidelines = guidelines_for(condition);
        let diet = dietary_recommendations(condition);
        let exercise = exercise_recommendations(condition);

        assert_eq!(diet.avoid_foods, guidelines.avoid_foods);
        assert_eq!(
            exercise.exercise_modifications,
            guidelines.exercise_modifications
        );
    }
}

#[test]
fn test_display_name_for_code() {
    assert_eq!(display_name_for_code("diabetes_type1"), "Type 1 Diabetes");
    assert_eq!(display_name_for_code("diabetes_type2"), "Type 2 Diabetes");
    assert_eq!(display_name_for_code("hypertension"), "High Blood Pressure");
    assert_eq!(display_name_for_code("pcos"), "PCOS");
    assert_eq!(display_name_for_code("none"), "No Medical Conditions");
    assert_eq!(display_name_for_code("celiac"), "Celiac Disease");
    assert_eq!(display_name_for_code("scurvy"), "Unknown Condition");
    assert_eq!(display_name_for_code("DIABETES_TYPE2"), "Unknown Condition");
    assert_eq!(display_name_for_code("Celiac "), "Unknown Condition");
}

#[test]
fn test_recommendations_serialize_camel_case() {
    let json = serde_json::to_value(dietary_recommendations(MedicalCondition::Anemia)).unwrap();
    assert_eq!(json["condition"], "anemia");
    assert!(json["dietaryRestrictions"].is_array());
    assert!(json["avoidFoods"].is_array());
}
