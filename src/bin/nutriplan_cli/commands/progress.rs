// ABOUTME: Progress commands for nutriplan-cli
// ABOUTME: Handles marking and clearing days and the monthly adherence summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Local, NaiveDate};
use nutriplan::context::AppContext;
use nutriplan::progress;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::ProgressStatus;

use crate::helpers::display::display_month;
use crate::helpers::session::require_session;

type Result<T> = AppResult<T>;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Record how the plan went on a day
pub async fn mark(context: &AppContext, date: Option<NaiveDate>, status: ProgressStatus) -> Result<()> {
    require_session(context)?;
    let date = date.unwrap_or_else(today);
    progress::mark_day(context.database(), date, status).await?;
    println!("{date}: {status}");
    Ok(())
}

/// Forget the status of a day
pub async fn clear(context: &AppContext, date: Option<NaiveDate>) -> Result<()> {
    require_session(context)?;
    let date = date.unwrap_or_else(today);
    if progress::clear_day(context.database(), date).await? {
        println!("{date}: cleared");
    } else {
        println!("{date}: nothing recorded");
    }
    Ok(())
}

/// Summarize a calendar month
pub async fn month(context: &AppContext, year: Option<i32>, month: Option<u32>) -> Result<()> {
    require_session(context)?;
    let now = today();
    let summary = progress::month_summary(
        context.database(),
        year.unwrap_or_else(|| now.year()),
        month.unwrap_or_else(|| now.month()),
    )
    .await?;
    let streak = progress::streak(context.database(), now).await?;
    display_month(&summary, streak);
    Ok(())
}
