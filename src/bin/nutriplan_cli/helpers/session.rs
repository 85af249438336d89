// ABOUTME: Session helpers for nutriplan-cli
// ABOUTME: Requires the session restored from the local store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::context::AppContext;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::SessionUser;

/// The restored session's user, or `AuthRequired` when nobody is signed in
pub fn require_session(context: &AppContext) -> AppResult<SessionUser> {
    context.session_user().cloned().ok_or_else(|| {
        AppError::auth_required()
            .with_details(serde_json::json!({ "hint": "run `nutriplan-cli account login`" }))
    })
}
