// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, validation limits, service names, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identity used by logging and the CLI
pub mod service_names {
    /// Library / service name
    pub const NUTRIPLAN: &str = "nutriplan";
    /// CLI binary name
    pub const NUTRIPLAN_CLI: &str = "nutriplan-cli";
}

/// Keys of the records in the local key-value store
pub mod storage_keys {
    /// Health profile
    pub const USER_PROFILE: &str = "userProfile";
    /// Registered credentials
    pub const USER_CREDENTIALS: &str = "userCredentials";
    /// Last generated diet plan
    pub const DIET_PLAN: &str = "dietPlan";
    /// Last generated exercise plan
    pub const EXERCISE_PLAN: &str = "exercisePlan";
    /// Reminder preferences
    pub const NOTIFICATIONS_ENABLED: &str = "notificationsEnabled";
    /// Day-keyed progress map
    pub const PROGRESS_DATA: &str = "progressData";
    /// Set while a user is signed in; cleared by logout
    pub const SESSION_ACTIVE: &str = "sessionActive";

    /// Every key owned by the application, in the order they are cleared
    pub const ALL: [&str; 7] = [
        USER_PROFILE,
        USER_CREDENTIALS,
        DIET_PLAN,
        EXERCISE_PLAN,
        NOTIFICATIONS_ENABLED,
        PROGRESS_DATA,
        SESSION_ACTIVE,
    ];
}

/// Accepted ranges for profile and credential fields
pub mod limits {
    /// Minimum accepted age (years)
    pub const MIN_AGE_YEARS: u32 = 13;
    /// Maximum accepted age (years)
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Minimum accepted weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Maximum accepted weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum username length after trimming
    pub const MIN_USERNAME_LENGTH: usize = 3;
    /// Minimum password length
    pub const MIN_PASSWORD_LENGTH: usize = 6;
}

/// Energy density of macronutrients
pub mod nutrition {
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
}

/// Progress tracking date format
pub mod dates {
    /// Format of progress map keys (`YYYY-MM-DD`)
    pub const PROGRESS_DATE_FORMAT: &str = "%Y-%m-%d";
}
