// ABOUTME: Single-account registration and login for the local device
// ABOUTME: Validates credentials, hashes passwords with bcrypt, and checks them on login
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication
//!
//! One account per device. Passwords are stored only as bcrypt hashes, and
//! hashing runs on the blocking pool so the async executor is not stalled.

use chrono::Utc;
use nutriplan_core::constants::limits;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{SessionUser, StoredCredentials, UserProfile};
use tokio::task;
use tracing::{info, warn};

use crate::database::Database;
use crate::logging::AppLogger;

/// Input of the registration form
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username, trimmed before use
    pub username: String,
    /// Password
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
}

impl RegistrationRequest {
    /// Check username and password rules, returning the trimmed username
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first rule that fails
    pub fn validate(&self) -> AppResult<&str> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(AppError::missing_field("username"));
        }
        if username.chars().count() < limits::MIN_USERNAME_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Username must be at least {} characters",
                limits::MIN_USERNAME_LENGTH
            )));
        }
        if self.password.is_empty() {
            return Err(AppError::missing_field("password"));
        }
        if self.password.chars().count() < limits::MIN_PASSWORD_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {} characters",
                limits::MIN_PASSWORD_LENGTH
            )));
        }
        if self.password != self.confirm_password {
            return Err(AppError::invalid_input("Passwords do not match"));
        }
        Ok(username)
    }
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The signed-in user
    pub user: SessionUser,
    /// Stored health profile, absent until the profile form is completed
    pub profile: Option<UserProfile>,
}

/// Hash a password on the blocking pool
///
/// # Errors
///
/// Returns an error if hashing fails or the task is cancelled
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_owned();
    task::spawn_blocking(move || bcrypt::hash(&password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))
}

/// Verify a password against a stored hash on the blocking pool
///
/// A malformed hash verifies as `false`.
///
/// # Errors
///
/// Returns an error if the task is cancelled
pub async fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    task::spawn_blocking(move || bcrypt::verify(&password, &hash).unwrap_or(false))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}

/// Register the device account
///
/// Registering the username that is already stored is rejected. Registering a
/// different username replaces the stored account.
///
/// # Errors
///
/// Returns a validation error for bad input, `ResourceAlreadyExists` for a
/// duplicate username, or a storage error
pub async fn register(
    db: &Database,
    request: &RegistrationRequest,
    bcrypt_cost: u32,
) -> AppResult<StoredCredentials> {
    let username = match request.validate() {
        Ok(username) => username,
        Err(e) => {
            AppLogger::log_auth_event(request.username.trim(), "register", false, Some(&e.message));
            return Err(e);
        }
    };

    if let Some(existing) = db.get_credentials().await? {
        if existing.username == username {
            AppLogger::log_auth_event(username, "register", false, Some("duplicate username"));
            return Err(AppError::already_exists(
                "Username already exists. Please choose a different username.",
            ));
        }
        warn!(
            previous = %existing.username,
            "Replacing the account registered on this device"
        );
    }

    let password_hash = hash_password(&request.password, bcrypt_cost).await?;
    let credentials = StoredCredentials {
        username: username.to_owned(),
        password_hash,
        created_at: Utc::now(),
    };
    db.save_credentials(&credentials).await?;

    AppLogger::log_auth_event(username, "register", true, None);
    Ok(credentials)
}

/// Check a username and password against the stored account
///
/// # Errors
///
/// Returns `AuthRequired` when no account is registered, `AuthInvalid` when
/// the username or password does not match, or a storage error
pub async fn login(db: &Database, username: &str, password: &str) -> AppResult<LoginOutcome> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::missing_field("username"));
    }
    if password.is_empty() {
        return Err(AppError::missing_field("password"));
    }

    let Some(credentials) = db.get_credentials().await? else {
        AppLogger::log_auth_event(username, "login", false, Some("no account"));
        return Err(AppError::auth_required());
    };

    let matches = credentials.username == username
        && verify_password(password, &credentials.password_hash).await?;
    if !matches {
        AppLogger::log_auth_event(username, "login", false, Some("credential mismatch"));
        return Err(AppError::auth_invalid("Invalid username or password"));
    }

    let profile = db.get_user_profile().await?;
    info!(
        user.name = %username,
        has_profile = profile.is_some(),
        "User logged in"
    );
    AppLogger::log_auth_event(username, "login", true, None);

    Ok(LoginOutcome {
        user: SessionUser::from(&credentials),
        profile,
    })
}
