// ABOUTME: Stored account credentials for the single on-device account
// ABOUTME: Holds the username and a bcrypt hash, never the plaintext password
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account record persisted under `userCredentials`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCredentials {
    /// Trimmed username
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

/// The signed-in user as held by the application state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Username of the signed-in account
    pub username: String,
}

impl From<&StoredCredentials> for SessionUser {
    fn from(credentials: &StoredCredentials) -> Self {
        Self {
            username: credentials.username.clone(),
        }
    }
}
