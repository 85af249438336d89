// ABOUTME: Plan commands for nutriplan-cli
// ABOUTME: Handles generating both plans and showing a stored plan as text or HTML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::context::AppContext;
use nutriplan::plans::render_document;
use nutriplan_core::errors::{AppError, AppResult};
use tracing::warn;

use crate::helpers::display::{display_diet_summary, display_exercise_summary, html_to_text};
use crate::helpers::session::require_session;
use crate::PlanChoice;

type Result<T> = AppResult<T>;

/// Generate both plans from the current profile
pub async fn generate(context: &mut AppContext) -> Result<()> {
    require_session(context)?;
    let report = context.generate_recommendations().await?;

    if let Some(plan) = &report.diet_plan {
        display_diet_summary(plan);
    }
    if let Some(plan) = &report.exercise_plan {
        display_exercise_summary(plan);
    }
    for (kind, error) in &report.failures {
        warn!(?kind, error = %error, "Plan not generated");
        eprintln!("Could not generate the {kind:?} plan: {error}");
    }

    println!("\nView a plan with `nutriplan-cli plan show diet` or `plan show exercise`.");
    Ok(())
}

/// Show a stored plan
pub fn show(context: &AppContext, choice: PlanChoice, as_html: bool) -> Result<()> {
    require_session(context)?;
    let state = context.state();

    let (html, name) = match choice {
        PlanChoice::Diet => {
            let plan = state
                .diet_plan
                .as_ref()
                .ok_or_else(|| AppError::not_found("Diet plan"))?;
            if !as_html {
                display_diet_summary(plan);
            }
            (plan.html.as_str(), "diet")
        }
        PlanChoice::Exercise => {
            let plan = state
                .exercise_plan
                .as_ref()
                .ok_or_else(|| AppError::not_found("Exercise plan"))?;
            if !as_html {
                display_exercise_summary(plan);
            }
            (plan.html.as_str(), "exercise")
        }
    };

    if as_html {
        print!("{}", render_document(html));
    } else {
        println!("\n{}", html_to_text(html));
        println!("\nExport with `nutriplan-cli plan show {name} --html > {name}.html`.");
    }
    Ok(())
}
