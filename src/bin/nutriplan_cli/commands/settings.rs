// ABOUTME: Settings commands for nutriplan-cli
// ABOUTME: Shows and updates the stored reminder preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::context::AppContext;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::NotificationSettingsUpdate;

use crate::helpers::display::display_notifications;
use crate::helpers::session::require_session;

type Result<T> = AppResult<T>;

/// Show or change reminder preferences
pub async fn notifications(
    context: &mut AppContext,
    enabled: Option<bool>,
    meal_reminders: Option<bool>,
    exercise_reminders: Option<bool>,
) -> Result<()> {
    require_session(context)?;
    let update = NotificationSettingsUpdate {
        enabled,
        meal_reminders,
        exercise_reminders,
    };

    let settings = if update == NotificationSettingsUpdate::default() {
        context.state().notifications
    } else {
        context.set_notifications(update).await?
    };
    display_notifications(&settings);
    Ok(())
}
