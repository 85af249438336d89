// ABOUTME: Integration tests for the application context
// ABOUTME: Covers session restore, login/logout, profile updates, plan generation, and data reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use common::{registration, TEST_BCRYPT_COST, TEST_PASSWORD, TEST_USERNAME};
use nutriplan::context::AppContext;
use nutriplan::database::Database;
use nutriplan::plans::{PlanGenerator, TemplatePlanGenerator};
use nutriplan_core::errors::{AppError, AppResult, ErrorCode};
use nutriplan_core::models::{
    DietPlan, ExercisePlan, MedicalCondition, NotificationSettingsUpdate, PlanKind, UserProfile,
};
use tempfile::TempDir;

/// Template diet plans, exercise plans always fail
struct DietOnlyGenerator(TemplatePlanGenerator);

#[async_trait]
impl PlanGenerator for DietOnlyGenerator {
    fn name(&self) -> &'static str {
        "diet-only"
    }

    async fn diet_plan(&self, profile: &UserProfile) -> AppResult<DietPlan> {
        self.0.diet_plan(profile).await
    }

    async fn exercise_plan(&self, _profile: &UserProfile) -> AppResult<ExercisePlan> {
        Err(AppError::internal("exercise templates unavailable"))
    }
}

/// Every plan fails
struct BrokenGenerator;

#[async_trait]
impl PlanGenerator for BrokenGenerator {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn diet_plan(&self, _profile: &UserProfile) -> AppResult<DietPlan> {
        Err(AppError::internal("diet templates unavailable"))
    }

    async fn exercise_plan(&self, _profile: &UserProfile) -> AppResult<ExercisePlan> {
        Err(AppError::internal("exercise templates unavailable"))
    }
}

#[tokio::test]
async fn test_fresh_context_starts_loading_and_signed_out() -> Result<()> {
    let mut context = common::create_test_context().await?;
    assert!(context.state().loading);

    let restored = context.check_auth_status().await?;

    assert!(!restored);
    let state = context.state();
    assert!(!state.loading);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert!(state.notifications.enabled);
    Ok(())
}

#[tokio::test]
async fn test_register_signs_in_without_profile() -> Result<()> {
    let mut context = common::create_test_context().await?;
    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;

    let state = context.state();
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().username, TEST_USERNAME);
    assert!(state.user_profile.is_none());
    assert!(context.database().is_session_active().await?);

    let error = context.generate_recommendations().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    Ok(())
}

#[tokio::test]
async fn test_register_drops_profile_of_replaced_account() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;

    context.register(&registration("jordan", "another-secret")).await?;

    let state = context.state();
    assert_eq!(state.user.as_ref().unwrap().username, "jordan");
    assert!(state.user_profile.is_none());
    Ok(())
}

#[tokio::test]
async fn test_login_sets_session() -> Result<()> {
    let mut context = common::create_test_context().await?;
    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;

    let user = context.login(TEST_USERNAME, TEST_PASSWORD).await?;

    assert_eq!(user.username, TEST_USERNAME);
    assert!(context.state().is_authenticated);
    assert_eq!(context.session_user(), Some(&user));
    assert!(context.state().user_profile.is_none());
    Ok(())
}

#[tokio::test]
async fn test_failed_login_leaves_state_untouched() -> Result<()> {
    let mut context = common::create_test_context().await?;
    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;
    let before = context.state().clone();

    let error = context.login(TEST_USERNAME, "nope-nope").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(context.state(), &before);
    Ok(())
}

#[tokio::test]
async fn test_update_profile_requires_session() -> Result<()> {
    let mut context = common::create_test_context().await?;

    let error = context
        .update_profile(common::sample_profile())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert!(context.database().get_user_profile().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_update_profile_validates_and_fills_username() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;

    let mut profile = common::sample_profile();
    profile.username = None;
    profile.weight_kg = 82.5;
    let saved = context.update_profile(profile).await?;
    assert_eq!(saved.username.as_deref(), Some(TEST_USERNAME));
    assert_eq!(context.state().user_profile.as_ref(), Some(&saved));
    assert_eq!(context.database().get_user_profile().await?, Some(saved));

    let mut invalid = common::sample_profile();
    invalid.age = 5;
    let error = context.update_profile(invalid).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!((context.state().user_profile.as_ref().unwrap().weight_kg - 82.5).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_generate_recommendations_stores_both_plans() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;

    let report = context.generate_recommendations().await?;

    assert!(report.is_complete());
    let diet = report.diet_plan.unwrap();
    let exercise = report.exercise_plan.unwrap();
    assert_eq!(diet.tdee, 2556);
    assert_eq!(diet.bmr, 1649);
    assert!((diet.bmi - 22.9).abs() < f64::EPSILON);
    assert!(diet.html.contains("Health Summary"));
    assert!(exercise.html.contains("Weekly Exercise Plan"));

    assert_eq!(context.state().diet_plan.as_ref(), Some(&diet));
    assert_eq!(context.state().exercise_plan.as_ref(), Some(&exercise));
    assert_eq!(context.database().get_diet_plan().await?, Some(diet));
    assert_eq!(context.database().get_exercise_plan().await?, Some(exercise));
    Ok(())
}

#[tokio::test]
async fn test_generate_requires_profile() -> Result<()> {
    let mut context = common::create_test_context().await?;
    let error = context.generate_recommendations().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);

    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;
    context.login(TEST_USERNAME, TEST_PASSWORD).await?;
    let error = context.generate_recommendations().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    Ok(())
}

#[tokio::test]
async fn test_partial_generation_keeps_successful_plan() -> Result<()> {
    let database = common::create_test_database().await?;
    let generator = Arc::new(DietOnlyGenerator(TemplatePlanGenerator::default()));
    let mut context = AppContext::with_generator(database, TEST_BCRYPT_COST, generator);
    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;
    context.login(TEST_USERNAME, TEST_PASSWORD).await?;
    context.update_profile(common::sample_profile()).await?;

    let report = context.generate_recommendations().await?;

    assert!(!report.is_complete());
    assert!(report.diet_plan.is_some());
    assert!(report.exercise_plan.is_none());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, PlanKind::Exercise);
    assert!(context.database().get_diet_plan().await?.is_some());
    assert!(context.database().get_exercise_plan().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_total_generation_failure_is_an_error() -> Result<()> {
    let database = common::create_test_database().await?;
    let mut context = AppContext::with_generator(database, TEST_BCRYPT_COST, Arc::new(BrokenGenerator));
    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;
    context.login(TEST_USERNAME, TEST_PASSWORD).await?;
    context.update_profile(common::sample_profile()).await?;

    let error = context.generate_recommendations().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::InternalError);
    assert_eq!(error.message, "diet templates unavailable");
    assert!(context.state().diet_plan.is_none());
    Ok(())
}

#[tokio::test]
async fn test_session_is_restored_with_plans() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;
    context.generate_recommendations().await?;
    let stored_diet = context.state().diet_plan.clone();

    let mut restarted = AppContext::new(context.database().clone(), TEST_BCRYPT_COST);
    let restored = restarted.check_auth_status().await?;

    assert!(restored);
    let state = restarted.state();
    assert!(!state.loading);
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().username, TEST_USERNAME);
    assert_eq!(state.user_profile, Some(common::sample_profile()));
    assert_eq!(state.diet_plan, stored_diet);
    assert!(state.exercise_plan.is_some());
    Ok(())
}

#[tokio::test]
async fn test_logout_keeps_stored_data() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;

    context.logout().await?;

    let state = context.state();
    assert!(!state.is_authenticated);
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(state.user_profile.is_none());
    assert!(context.database().get_user_profile().await?.is_some());
    assert!(context.database().get_credentials().await?.is_some());
    assert!(!context.database().is_session_active().await?);
    Ok(())
}

#[tokio::test]
async fn test_logout_lasts_across_restarts() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.path().join("nutriplan.db").display());

    {
        let mut context = AppContext::new(Database::new(&url).await?, TEST_BCRYPT_COST);
        context
            .register(&registration(TEST_USERNAME, TEST_PASSWORD))
            .await?;
        context.login(TEST_USERNAME, TEST_PASSWORD).await?;
        context.update_profile(common::sample_profile()).await?;
        context.logout().await?;
        context.database().pool().close().await;
    }

    let mut next_run = AppContext::new(Database::new(&url).await?, TEST_BCRYPT_COST);
    assert!(!next_run.check_auth_status().await?);
    assert!(next_run.session_user().is_none());
    assert!(next_run.state().user_profile.is_none());

    next_run.login(TEST_USERNAME, TEST_PASSWORD).await?;
    next_run.database().pool().close().await;

    let mut after_login = AppContext::new(Database::new(&url).await?, TEST_BCRYPT_COST);
    assert!(after_login.check_auth_status().await?);
    assert_eq!(after_login.state().user_profile, Some(common::sample_profile()));
    Ok(())
}

#[tokio::test]
async fn test_registered_session_is_restored_before_profile_setup() -> Result<()> {
    let mut context = common::create_test_context().await?;
    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;

    let mut restarted = AppContext::new(context.database().clone(), TEST_BCRYPT_COST);
    assert!(restarted.check_auth_status().await?);
    assert_eq!(restarted.session_user().unwrap().username, TEST_USERNAME);
    assert!(restarted.state().user_profile.is_none());

    restarted.update_profile(common::sample_profile()).await?;
    assert!(restarted.database().is_user_logged_in().await?);
    Ok(())
}

#[tokio::test]
async fn test_notification_updates_merge_and_persist() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;

    let settings = context
        .set_notifications(NotificationSettingsUpdate {
            meal_reminders: Some(false),
            ..NotificationSettingsUpdate::default()
        })
        .await?;

    assert!(settings.enabled);
    assert!(!settings.meal_reminders);
    assert!(settings.exercise_reminders);
    assert_eq!(context.state().notifications, settings);
    assert_eq!(context.database().get_notification_settings().await?, settings);

    let mut restarted = AppContext::new(context.database().clone(), TEST_BCRYPT_COST);
    restarted.check_auth_status().await?;
    assert_eq!(restarted.state().notifications, settings);
    Ok(())
}

#[tokio::test]
async fn test_clear_all_data_signs_out_and_forgets_account() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;
    context.generate_recommendations().await?;

    context.clear_all_data().await?;

    assert!(!context.state().is_authenticated);
    assert!(context.state().diet_plan.is_none());
    assert!(context.database().keys().await?.is_empty());

    let error = context.login(TEST_USERNAME, TEST_PASSWORD).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    Ok(())
}

#[tokio::test]
async fn test_medical_condition_reaches_plans() -> Result<()> {
    let mut context = common::create_signed_in_context().await?;
    let mut profile = common::sample_profile();
    profile.medical_condition = MedicalCondition::Hypertension;
    context.update_profile(profile).await?;

    let report = context.generate_recommendations().await?;

    assert!(report
        .diet_plan
        .unwrap()
        .html
        .contains("Medical Considerations"));
    assert!(report
        .exercise_plan
        .unwrap()
        .html
        .contains("Exercise Modifications"));
    Ok(())
}
