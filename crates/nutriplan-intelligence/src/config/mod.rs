// ABOUTME: Configuration module for the nutriplan-intelligence crate
// ABOUTME: Global calculator configuration with environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Nutrition formula configuration
pub mod nutrition;

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmiThresholds, BmrConfig, MacroSplitConfig, NutritionConfig,
};

/// Top-level calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Nutrition formula configuration
    pub nutrition: NutritionConfig,
}

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// Recognized variables: `NUTRIPLAN_MACRO_CARBS`, `NUTRIPLAN_MACRO_PROTEIN`,
    /// `NUTRIPLAN_MACRO_FAT` (fractions of TDEE).
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let split = &mut config.nutrition.macro_split;
        apply_f64_override("NUTRIPLAN_MACRO_CARBS", &mut split.carbs_fraction)?;
        apply_f64_override("NUTRIPLAN_MACRO_PROTEIN", &mut split.protein_fraction)?;
        apply_f64_override("NUTRIPLAN_MACRO_FAT", &mut split.fat_fraction)?;
        config.nutrition.validate()?;
        Ok(config)
    }
}

fn apply_f64_override(name: &str, target: &mut f64) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(name) {
        *target = raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::Parse(format!("{name}={raw}: {e}")))?;
    }
    Ok(())
}
