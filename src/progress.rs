// ABOUTME: Daily plan adherence tracking on top of the stored progress map
// ABOUTME: Mark, clear, and look up days, and summarize a calendar month
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use nutriplan_core::constants::dates::PROGRESS_DATE_FORMAT;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{ProgressEntry, ProgressStatus};
use nutriplan_intelligence::{current_streak, MonthlyProgress};
use tracing::info;

use crate::database::Database;

/// Parse a `YYYY-MM-DD` day
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not a valid calendar date
pub fn parse_day(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), PROGRESS_DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Invalid date '{text}', expected YYYY-MM-DD: {e}"))
    })
}

/// Record how the plan went on `date`, replacing any earlier status
///
/// # Errors
///
/// Returns an error if the store cannot be read or written
pub async fn mark_day(
    db: &Database,
    date: NaiveDate,
    status: ProgressStatus,
) -> AppResult<ProgressEntry> {
    let mut progress = db.get_progress().await?;
    let entry = ProgressEntry {
        status,
        timestamp: Utc::now(),
    };
    progress.insert(date, entry);
    db.save_progress(&progress).await?;
    info!(%date, %status, "Progress recorded");
    Ok(entry)
}

/// Forget the status of `date`; returns whether the day was tracked
///
/// # Errors
///
/// Returns an error if the store cannot be read or written
pub async fn clear_day(db: &Database, date: NaiveDate) -> AppResult<bool> {
    let mut progress = db.get_progress().await?;
    if progress.remove(&date).is_none() {
        return Ok(false);
    }
    db.save_progress(&progress).await?;
    info!(%date, "Progress cleared");
    Ok(true)
}

/// Status recorded for `date`, `None` when the day is untracked
///
/// # Errors
///
/// Returns an error if the store cannot be read
pub async fn status_for(db: &Database, date: NaiveDate) -> AppResult<Option<ProgressStatus>> {
    Ok(db.get_progress().await?.get(&date).map(|entry| entry.status))
}

/// Counts and adherence for a calendar month
///
/// # Errors
///
/// Returns `InvalidInput` for a month outside 1-12, or a read error
pub async fn month_summary(db: &Database, year: i32, month: u32) -> AppResult<MonthlyProgress> {
    if !(1..=12).contains(&month) {
        return Err(AppError::invalid_input(format!(
            "Month must be between 1 and 12, got {month}"
        )));
    }
    let progress = db.get_progress().await?;
    Ok(MonthlyProgress::compute(&progress, year, month))
}

/// Consecutive fully followed days ending at `today`
///
/// # Errors
///
/// Returns an error if the store cannot be read
pub async fn streak(db: &Database, today: NaiveDate) -> AppResult<u32> {
    Ok(current_streak(&db.get_progress().await?, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day(" 2025-02-28 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(parse_day("2025-02-30").is_err());
        assert!(parse_day("28/02/2025").is_err());
    }
}
