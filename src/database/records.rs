// ABOUTME: Typed accessors for the records kept in the key-value store
// ABOUTME: Profile, credentials, plans, notification preferences, and the progress map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use nutriplan_core::constants::storage_keys;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{
    DietPlan, ExercisePlan, NotificationSettings, ProgressMap, StoredCredentials, UserProfile,
};

use super::Database;

impl Database {
    /// Stored health profile, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_user_profile(&self) -> AppResult<Option<UserProfile>> {
        self.get_json(storage_keys::USER_PROFILE).await
    }

    /// Store the health profile
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn save_user_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.put_json(storage_keys::USER_PROFILE, profile).await
    }

    /// Stored account credentials, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_credentials(&self) -> AppResult<Option<StoredCredentials>> {
        self.get_json(storage_keys::USER_CREDENTIALS).await
    }

    /// Store account credentials
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn save_credentials(&self, credentials: &StoredCredentials) -> AppResult<()> {
        self.put_json(storage_keys::USER_CREDENTIALS, credentials)
            .await
    }

    /// Last stored diet plan, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_diet_plan(&self) -> AppResult<Option<DietPlan>> {
        self.get_json(storage_keys::DIET_PLAN).await
    }

    /// Store a diet plan, stamping it with the storage time
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn save_diet_plan(&self, plan: &DietPlan) -> AppResult<DietPlan> {
        let stamped = DietPlan {
            generated_at: Utc::now(),
            ..plan.clone()
        };
        self.put_json(storage_keys::DIET_PLAN, &stamped).await?;
        Ok(stamped)
    }

    /// Last stored exercise plan, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_exercise_plan(&self) -> AppResult<Option<ExercisePlan>> {
        self.get_json(storage_keys::EXERCISE_PLAN).await
    }

    /// Store an exercise plan, stamping it with the storage time
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn save_exercise_plan(&self, plan: &ExercisePlan) -> AppResult<ExercisePlan> {
        let stamped = ExercisePlan {
            generated_at: Utc::now(),
            ..plan.clone()
        };
        self.put_json(storage_keys::EXERCISE_PLAN, &stamped).await?;
        Ok(stamped)
    }

    /// Reminder preferences, all enabled when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_notification_settings(&self) -> AppResult<NotificationSettings> {
        Ok(self
            .get_json(storage_keys::NOTIFICATIONS_ENABLED)
            .await?
            .unwrap_or_default())
    }

    /// Store reminder preferences
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn save_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> AppResult<()> {
        self.put_json(storage_keys::NOTIFICATIONS_ENABLED, settings)
            .await
    }

    /// Day-keyed progress map, empty when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn get_progress(&self) -> AppResult<ProgressMap> {
        Ok(self
            .get_json(storage_keys::PROGRESS_DATA)
            .await?
            .unwrap_or_default())
    }

    /// Replace the progress map
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn save_progress(&self, progress: &ProgressMap) -> AppResult<()> {
        self.put_json(storage_keys::PROGRESS_DATA, progress).await
    }

    /// Whether a user signed in and has not logged out since
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    pub async fn is_session_active(&self) -> AppResult<bool> {
        Ok(self
            .get_json(storage_keys::SESSION_ACTIVE)
            .await?
            .unwrap_or(false))
    }

    /// Record whether a user is signed in
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn set_session_active(&self, active: bool) -> AppResult<()> {
        self.put_json(storage_keys::SESSION_ACTIVE, &active).await
    }

    /// A user counts as logged in when both credentials and a profile are stored
    ///
    /// # Errors
    ///
    /// Returns an error if a read fails
    pub async fn is_user_logged_in(&self) -> AppResult<bool> {
        Ok(self.get_credentials().await?.is_some() && self.get_user_profile().await?.is_some())
    }
}
