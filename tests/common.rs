// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, sample profiles, and signed-in contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutriplan`

use std::env;
use std::sync::Once;

use anyhow::Result;
use nutriplan::auth::RegistrationRequest;
use nutriplan::context::AppContext;
use nutriplan::database::Database;
use nutriplan_core::models::{
    DietaryPreference, ExerciseLevel, Gender, HealthGoal, MedicalCondition, UserProfile,
};

static INIT_LOGGER: Once = Once::new();

/// Lowest cost bcrypt accepts, keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_USERNAME: &str = "alex";
pub const TEST_PASSWORD: &str = "secret123";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// The profile used throughout the calculator examples
pub fn sample_profile() -> UserProfile {
    UserProfile {
        username: Some(TEST_USERNAME.into()),
        age: 30,
        gender: Gender::Male,
        weight_kg: 70.0,
        height_cm: 175.0,
        dietary_preference: DietaryPreference::NonVegetarian,
        health_goal: HealthGoal::Maintain,
        exercise_level: ExerciseLevel::Moderate,
        medical_condition: MedicalCondition::None,
    }
}

pub fn registration(username: &str, password: &str) -> RegistrationRequest {
    RegistrationRequest {
        username: username.into(),
        password: password.into(),
        confirm_password: password.into(),
    }
}

/// Context over a fresh in-memory database
pub async fn create_test_context() -> Result<AppContext> {
    let database = create_test_database().await?;
    Ok(AppContext::new(database, TEST_BCRYPT_COST))
}

/// Context with a registered, logged-in user and a stored profile
pub async fn create_signed_in_context() -> Result<AppContext> {
    let mut context = create_test_context().await?;
    context
        .register(&registration(TEST_USERNAME, TEST_PASSWORD))
        .await?;
    context.login(TEST_USERNAME, TEST_PASSWORD).await?;
    context.update_profile(sample_profile()).await?;
    Ok(context)
}
