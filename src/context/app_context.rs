// ABOUTME: Application context combining reducer state, local storage, and plan generation
// ABOUTME: Session restore, login/register/logout, profile updates, plan generation, settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::mem;
use std::sync::Arc;

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{
    DietPlan, ExercisePlan, NotificationSettings, NotificationSettingsUpdate, PlanKind,
    SessionUser, StoredCredentials, UserProfile,
};
use tracing::{debug, info, warn};

use super::state::{reduce, Action, AppState};
use crate::auth::{self, RegistrationRequest};
use crate::config::AppConfig;
use crate::database::Database;
use crate::plans::{PlanGenerator, TemplatePlanGenerator};

/// Outcome of generating both plans
///
/// Each plan is generated and stored independently, so one may succeed while
/// the other fails.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Stored diet plan, if generation succeeded
    pub diet_plan: Option<DietPlan>,
    /// Stored exercise plan, if generation succeeded
    pub exercise_plan: Option<ExercisePlan>,
    /// Plans that failed, with the reason
    pub failures: Vec<(PlanKind, AppError)>,
}

impl GenerationReport {
    /// True when both plans were produced
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Owns the application state and every dependency needed to change it
pub struct AppContext {
    state: AppState,
    database: Database,
    generator: Arc<dyn PlanGenerator>,
    bcrypt_cost: u32,
}

impl AppContext {
    /// Create a context over an open database using the template generator
    #[must_use]
    pub fn new(database: Database, bcrypt_cost: u32) -> Self {
        Self::with_generator(database, bcrypt_cost, Arc::new(TemplatePlanGenerator::default()))
    }

    /// Create a context with a specific plan generator
    #[must_use]
    pub fn with_generator(
        database: Database,
        bcrypt_cost: u32,
        generator: Arc<dyn PlanGenerator>,
    ) -> Self {
        Self {
            state: AppState::initial(),
            database,
            generator,
            bcrypt_cost,
        }
    }

    /// Open the configured database and build a context over it
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let database = Database::open(&config.database).await?;
        Ok(Self::new(database, config.bcrypt_cost))
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Underlying store
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// Apply an action to the state
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        let state = mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Restore the stored session, if any
    ///
    /// A user is signed in again when credentials are stored and the last
    /// sign-in was not followed by a logout. The stored profile, plans and
    /// reminder preferences are loaded as well. The loading flag is cleared
    /// whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if a read fails
    pub async fn check_auth_status(&mut self) -> AppResult<bool> {
        self.dispatch(Action::SetLoading(true));
        let result = self.restore_session().await;
        self.dispatch(Action::SetLoading(false));
        if let Err(e) = &result {
            warn!(error = %e, "Failed to restore stored session");
        }
        result
    }

    async fn restore_session(&mut self) -> AppResult<bool> {
        let notifications = self.database.get_notification_settings().await?;
        self.dispatch(Action::SetNotifications(full_update(notifications)));

        if !self.database.is_session_active().await? {
            return Ok(false);
        }
        let Some(credentials) = self.database.get_credentials().await? else {
            return Ok(false);
        };

        let profile = self.database.get_user_profile().await?;
        self.dispatch(Action::SetUser(Some(SessionUser::from(&credentials))));
        self.dispatch(Action::SetUserProfile(profile));
        self.dispatch(Action::SetAuthenticated(true));
        self.load_stored_plans().await?;
        Ok(true)
    }

    /// Sign in with the stored account
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when no account exists or `AuthInvalid` on mismatch
    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<SessionUser> {
        let outcome = auth::login(&self.database, username, password).await?;
        self.database.set_session_active(true).await?;
        self.dispatch(Action::SetUser(Some(outcome.user.clone())));
        self.dispatch(Action::SetUserProfile(outcome.profile));
        self.dispatch(Action::SetAuthenticated(true));
        Ok(outcome.user)
    }

    /// Register the device account and sign the new user in
    ///
    /// The session starts without a profile; any profile left by a previous
    /// account is not carried into it.
    ///
    /// # Errors
    ///
    /// Returns a validation error, `ResourceAlreadyExists`, or a storage error
    pub async fn register(&mut self, request: &RegistrationRequest) -> AppResult<StoredCredentials> {
        let credentials = auth::register(&self.database, request, self.bcrypt_cost).await?;
        self.database.set_session_active(true).await?;
        self.dispatch(Action::SetUser(Some(SessionUser::from(&credentials))));
        self.dispatch(Action::SetUserProfile(None));
        self.dispatch(Action::SetAuthenticated(true));
        Ok(credentials)
    }

    /// End the session; stored data is kept
    ///
    /// The next [`check_auth_status`](Self::check_auth_status) will not sign
    /// the user back in.
    ///
    /// # Errors
    ///
    /// Returns an error if the session flag cannot be written
    pub async fn logout(&mut self) -> AppResult<()> {
        self.database.set_session_active(false).await?;
        if let Some(user) = &self.state.user {
            info!(user.name = %user.username, "User logged out");
        }
        self.dispatch(Action::Logout);
        Ok(())
    }

    /// Validate and store the health profile for the signed-in user
    ///
    /// The session username fills in a missing display name.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when nobody is signed in, a range error from
    /// validation, or a storage error
    pub async fn update_profile(&mut self, mut profile: UserProfile) -> AppResult<UserProfile> {
        let Some(user) = self.session_user() else {
            return Err(AppError::auth_required());
        };
        if profile.username.as_deref().is_none_or(|name| name.trim().is_empty()) {
            profile.username = Some(user.username.clone());
        }
        profile.validate()?;

        self.database.save_user_profile(&profile).await?;
        self.dispatch(Action::SetUserProfile(Some(profile.clone())));
        info!(
            goal = %profile.health_goal,
            level = %profile.exercise_level,
            "Health profile updated"
        );
        Ok(profile)
    }

    /// Generate, store, and publish both plans for the current profile
    ///
    /// # Errors
    ///
    /// Returns an error when nobody is signed in, no profile is stored, or
    /// both plans fail
    pub async fn generate_recommendations(&mut self) -> AppResult<GenerationReport> {
        let profile = self.current_profile()?.clone();
        let mut report = GenerationReport::default();

        match self.generate_diet_plan(&profile).await {
            Ok(plan) => report.diet_plan = Some(plan),
            Err(e) => {
                warn!(error = %e, generator = self.generator.name(), "Diet plan generation failed");
                report.failures.push((PlanKind::Diet, e));
            }
        }

        match self.generate_exercise_plan(&profile).await {
            Ok(plan) => report.exercise_plan = Some(plan),
            Err(e) => {
                warn!(error = %e, generator = self.generator.name(), "Exercise plan generation failed");
                report.failures.push((PlanKind::Exercise, e));
            }
        }

        if report.diet_plan.is_none() && report.exercise_plan.is_none() {
            if let Some((_, error)) = report.failures.into_iter().next() {
                return Err(error);
            }
            return Err(AppError::internal("No plan was generated"));
        }
        Ok(report)
    }

    async fn generate_diet_plan(&mut self, profile: &UserProfile) -> AppResult<DietPlan> {
        let plan = self.generator.diet_plan(profile).await?;
        let stored = self.database.save_diet_plan(&plan).await?;
        self.dispatch(Action::SetDietPlan(Some(stored.clone())));
        Ok(stored)
    }

    async fn generate_exercise_plan(&mut self, profile: &UserProfile) -> AppResult<ExercisePlan> {
        let plan = self.generator.exercise_plan(profile).await?;
        let stored = self.database.save_exercise_plan(&plan).await?;
        self.dispatch(Action::SetExercisePlan(Some(stored.clone())));
        Ok(stored)
    }

    /// Publish whichever plans are stored; missing plans leave the state as is
    ///
    /// # Errors
    ///
    /// Returns an error if a read fails
    pub async fn load_stored_plans(&mut self) -> AppResult<()> {
        if let Some(plan) = self.database.get_diet_plan().await? {
            self.dispatch(Action::SetDietPlan(Some(plan)));
        }
        if let Some(plan) = self.database.get_exercise_plan().await? {
            self.dispatch(Action::SetExercisePlan(Some(plan)));
        }
        Ok(())
    }

    /// Merge and store reminder preferences
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn set_notifications(
        &mut self,
        update: NotificationSettingsUpdate,
    ) -> AppResult<NotificationSettings> {
        let merged = self.state.notifications.merged(update);
        self.database.save_notification_settings(&merged).await?;
        self.dispatch(Action::SetNotifications(update));
        Ok(self.state.notifications)
    }

    /// Remove every stored record and end the session
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared
    pub async fn clear_all_data(&mut self) -> AppResult<()> {
        self.database.clear_all().await?;
        self.dispatch(Action::Logout);
        info!("All local data cleared");
        Ok(())
    }

    /// The signed-in user, if any
    #[must_use]
    pub fn session_user(&self) -> Option<&SessionUser> {
        if self.state.is_authenticated {
            self.state.user.as_ref()
        } else {
            None
        }
    }

    /// The signed-in user's profile
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when nobody is signed in, `ResourceNotFound`
    /// when no profile has been set up
    pub fn current_profile(&self) -> AppResult<&UserProfile> {
        if self.session_user().is_none() {
            return Err(AppError::auth_required());
        }
        self.state
            .user_profile
            .as_ref()
            .ok_or_else(|| AppError::not_found("Health profile"))
    }
}

const fn full_update(settings: NotificationSettings) -> NotificationSettingsUpdate {
    NotificationSettingsUpdate {
        enabled: Some(settings.enabled),
        meal_reminders: Some(settings.meal_reminders),
        exercise_reminders: Some(settings.exercise_reminders),
    }
}
