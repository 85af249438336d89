// ABOUTME: Day-keyed progress tracking model
// ABOUTME: ProgressStatus enumeration, per-day entries, and the ordered progress map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// How closely the plan was followed on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    /// Plan followed completely
    Followed,
    /// Plan followed in part
    PartiallyFollowed,
    /// Plan not followed
    NotFollowed,
}

impl ProgressStatus {
    /// All variants
    pub const ALL: [Self; 3] = [Self::Followed, Self::PartiallyFollowed, Self::NotFollowed];

    /// Stored wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Followed => "followed",
            Self::PartiallyFollowed => "partially-followed",
            Self::NotFollowed => "not-followed",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown progress status: '{s}'")))
    }
}

/// One tracked day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Recorded status
    pub status: ProgressStatus,
    /// When the status was recorded
    pub timestamp: DateTime<Utc>,
}

/// Progress entries keyed by calendar date, persisted under `progressData`
pub type ProgressMap = BTreeMap<NaiveDate, ProgressEntry>;
