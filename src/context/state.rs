// ABOUTME: Application state snapshot and the pure reducer that evolves it
// ABOUTME: Every state change is an Action applied by reduce(state, action)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{
    DietPlan, ExercisePlan, NotificationSettings, NotificationSettingsUpdate, SessionUser,
    UserProfile,
};
use serde::Serialize;

/// Session-wide application state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Signed-in user
    pub user: Option<SessionUser>,
    /// Health profile of the signed-in user
    pub user_profile: Option<UserProfile>,
    /// Whether a user is signed in
    pub is_authenticated: bool,
    /// Whether the stored session is still being restored
    pub loading: bool,
    /// Current diet plan
    pub diet_plan: Option<DietPlan>,
    /// Current exercise plan
    pub exercise_plan: Option<ExercisePlan>,
    /// Reminder preferences
    pub notifications: NotificationSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            user_profile: None,
            is_authenticated: false,
            loading: true,
            diet_plan: None,
            exercise_plan: None,
            notifications: NotificationSettings::default(),
        }
    }
}

impl AppState {
    /// State at startup, before the stored session is checked
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the loading flag
    SetLoading(bool),
    /// Replace the signed-in user
    SetUser(Option<SessionUser>),
    /// Replace the health profile
    SetUserProfile(Option<UserProfile>),
    /// Set the authenticated flag
    SetAuthenticated(bool),
    /// Replace the diet plan
    SetDietPlan(Option<DietPlan>),
    /// Replace the exercise plan
    SetExercisePlan(Option<ExercisePlan>),
    /// Merge a partial update into the reminder preferences
    SetNotifications(NotificationSettingsUpdate),
    /// Back to the initial state with loading finished
    Logout,
    /// Back to the initial state
    ResetState,
}

/// Apply `action` to `state`
#[must_use]
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::SetLoading(loading) => AppState { loading, ..state },
        Action::SetUser(user) => AppState { user, ..state },
        Action::SetUserProfile(user_profile) => AppState {
            user_profile,
            ..state
        },
        Action::SetAuthenticated(is_authenticated) => AppState {
            is_authenticated,
            ..state
        },
        Action::SetDietPlan(diet_plan) => AppState { diet_plan, ..state },
        Action::SetExercisePlan(exercise_plan) => AppState {
            exercise_plan,
            ..state
        },
        Action::SetNotifications(update) => AppState {
            notifications: state.notifications.merged(update),
            ..state
        },
        Action::Logout => AppState {
            loading: false,
            ..AppState::initial()
        },
        Action::ResetState => AppState::initial(),
    }
}
