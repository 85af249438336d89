// ABOUTME: Reminder preference model
// ABOUTME: Persisted notification toggles and the partial update applied by the settings screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Reminder preferences persisted under `notificationsEnabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Master switch
    pub enabled: bool,
    /// Daily meal reminders
    pub meal_reminders: bool,
    /// Daily workout reminders
    pub exercise_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            meal_reminders: true,
            exercise_reminders: true,
        }
    }
}

impl NotificationSettings {
    /// Merge a partial update; fields left as `None` keep their value
    #[must_use]
    pub const fn merged(self, update: NotificationSettingsUpdate) -> Self {
        Self {
            enabled: match update.enabled {
                Some(value) => value,
                None => self.enabled,
            },
            meal_reminders: match update.meal_reminders {
                Some(value) => value,
                None => self.meal_reminders,
            },
            exercise_reminders: match update.exercise_reminders {
                Some(value) => value,
                None => self.exercise_reminders,
            },
        }
    }

    /// Meal reminders are active only when the master switch is on
    #[must_use]
    pub const fn meal_reminders_active(&self) -> bool {
        self.enabled && self.meal_reminders
    }

    /// Workout reminders are active only when the master switch is on
    #[must_use]
    pub const fn exercise_reminders_active(&self) -> bool {
        self.enabled && self.exercise_reminders
    }
}

/// Partial update of [`NotificationSettings`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettingsUpdate {
    /// New master switch value
    pub enabled: Option<bool>,
    /// New meal reminder value
    pub meal_reminders: Option<bool>,
    /// New workout reminder value
    pub exercise_reminders: Option<bool>,
}
