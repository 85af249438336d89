// ABOUTME: Plan adherence statistics over the day-keyed progress map
// ABOUTME: Monthly status counts, weighted adherence percentage, and follow streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate};
use nutriplan_core::models::{ProgressMap, ProgressStatus};
use serde::{Deserialize, Serialize};

/// Weight of a partially-followed day in the adherence score
const PARTIAL_DAY_WEIGHT: f64 = 0.5;

/// Status counts for one calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyProgress {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Days marked followed
    pub followed: u32,
    /// Days marked partially followed
    pub partially_followed: u32,
    /// Days marked not followed
    pub not_followed: u32,
    /// Tracked days in the month
    pub total: u32,
}

impl MonthlyProgress {
    /// Count the entries dated within `year`/`month`
    #[must_use]
    pub fn compute(entries: &ProgressMap, year: i32, month: u32) -> Self {
        let mut summary = Self {
            year,
            month,
            ..Self::default()
        };

        for (date, entry) in entries
            .iter()
            .filter(|(date, _)| date.year() == year && date.month() == month)
        {
            summary.total += 1;
            match entry.status {
                ProgressStatus::Followed => summary.followed += 1,
                ProgressStatus::PartiallyFollowed => summary.partially_followed += 1,
                ProgressStatus::NotFollowed => summary.not_followed += 1,
            }
            tracing::trace!(%date, status = %entry.status, "counted progress entry");
        }

        summary
    }

    /// Share of tracked days followed, partial days counting half, as a whole percentage
    #[must_use]
    pub fn adherence_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let score = f64::from(self.partially_followed)
            .mul_add(PARTIAL_DAY_WEIGHT, f64::from(self.followed));
        (score / f64::from(self.total) * 100.0).round() as u32
    }
}

/// Consecutive followed days ending today
///
/// An untracked `today` does not break the streak; counting then starts from
/// yesterday. Any day that is untracked or not fully followed ends the streak.
#[must_use]
pub fn current_streak(entries: &ProgressMap, today: NaiveDate) -> u32 {
    let start = if entries.contains_key(&today) {
        Some(today)
    } else {
        today.checked_sub_days(Days::new(1))
    };

    let mut streak = 0;
    let mut cursor = start;
    while let Some(day) = cursor {
        match entries.get(&day) {
            Some(entry) if entry.status == ProgressStatus::Followed => {
                streak += 1;
                cursor = day.checked_sub_days(Days::new(1));
            }
            _ => break,
        }
    }
    streak
}
