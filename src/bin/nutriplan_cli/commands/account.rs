// ABOUTME: Account commands for nutriplan-cli
// ABOUTME: Handles register, login, logout, and deleting all local data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::auth::RegistrationRequest;
use nutriplan::context::AppContext;
use nutriplan_core::errors::{AppError, AppResult};
use tracing::info;

type Result<T> = AppResult<T>;

/// Register the device account
pub async fn register(
    context: &mut AppContext,
    username: String,
    password: String,
    confirm_password: String,
) -> Result<()> {
    let request = RegistrationRequest {
        username,
        password,
        confirm_password,
    };
    let credentials = context.register(&request).await?;

    println!("\nAccount '{}' created. You are signed in.", credentials.username);
    println!("Set up your health profile with `nutriplan-cli profile set`.");
    Ok(())
}

/// Check credentials against the device account
pub async fn login(context: &mut AppContext, username: &str, password: &str) -> Result<()> {
    let user = context.login(username, password).await?;
    println!("\nWelcome back, {}!", user.username);

    if context.state().user_profile.is_none() {
        println!("No health profile yet. Set one up with `nutriplan-cli profile set`.");
    }
    Ok(())
}

/// End the current session
pub async fn logout(context: &mut AppContext) -> Result<()> {
    context.logout().await?;
    println!("Logged out. Your data stays on this device; use `account delete --yes` to remove it.");
    Ok(())
}

/// Delete every stored record
pub async fn delete(context: &mut AppContext, confirmed: bool) -> Result<()> {
    if !confirmed {
        return Err(AppError::invalid_input(
            "This deletes your account, profile, plans and progress. Re-run with --yes to confirm.",
        ));
    }
    context.clear_all_data().await?;
    info!("Local data deleted from CLI");
    println!("All data has been cleared.");
    Ok(())
}
