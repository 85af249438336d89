// ABOUTME: Domain models for the nutriplan health planner
// ABOUTME: Profile, credentials, plan records, progress map, and reminder settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every persisted record lives in one of these modules. Records are stored
//! independently of each other; nothing enforces references between them.

mod credentials;
mod plan;
mod profile;
mod progress;
mod settings;

pub use credentials::{SessionUser, StoredCredentials};
pub use plan::{DietPlan, ExercisePlan, Macros, PlanKind, PlanSource};
pub use profile::{
    display_name_for_code, DietaryPreference, ExerciseLevel, Gender, HealthGoal,
    MedicalCondition, UserProfile,
};
pub use progress::{ProgressEntry, ProgressMap, ProgressStatus};
pub use settings::{NotificationSettings, NotificationSettingsUpdate};
