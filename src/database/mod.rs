// ABOUTME: Local key-value store backed by SQLite
// ABOUTME: Connection setup, migrations, and JSON get/put/remove primitives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Every record lives in a single `kv_store` table under a fixed key, with the
//! value serialized as JSON. Typed accessors for each record are in [`records`].

/// Typed accessors for each stored record
pub mod records;

use std::str::FromStr;
use std::time::Instant;

use chrono::Utc;
use nutriplan_core::constants::storage_keys;
use nutriplan_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tokio::fs;
use tracing::{debug, warn};

use crate::config::DatabaseUrl;
use crate::logging::AppLogger;

/// Handle to the local key-value store
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the store at `database_url` and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the parent directory cannot be
    /// created, or the connection or migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(database_url)?;
        Self::open(&url).await
    }

    /// Open the store described by an already parsed [`DatabaseUrl`]
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn open(url: &DatabaseUrl) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create data directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&url.to_connection_string())?
            .create_if_missing(true);

        // An in-memory database lives only as long as its connection
        let pool = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        let db = Self { pool };
        db.migrate().await?;
        debug!(database = %url, "Local store ready");
        Ok(db)
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the key-value table
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create kv_store table: {e}")))?;

        Ok(())
    }

    /// Read and deserialize the value stored under `key`
    ///
    /// Returns `None` when the key is absent. A value that no longer matches the
    /// expected shape is logged and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to read '{key}': {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let raw: String = row.get("value");

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring unreadable stored value");
                Ok(None)
            }
        }
    }

    /// Serialize `value` and store it under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let started = Instant::now();
        let raw = serde_json::to_string(value)?;
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = ?3
            ",
        )
        .bind(key)
        .bind(&raw)
        .bind(&now)
        .execute(&self.pool)
        .await;

        AppLogger::log_storage_operation("put", key, result.is_ok(), elapsed_ms(started));
        result.map_err(|e| AppError::database(format!("Failed to write '{key}': {e}")))?;
        Ok(())
    }

    /// Delete the value under `key`; returns whether anything was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn remove(&self, key: &str) -> AppResult<bool> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await;

        AppLogger::log_storage_operation("remove", key, result.is_ok(), elapsed_ms(started));
        let done = result.map_err(|e| AppError::database(format!("Failed to remove '{key}': {e}")))?;
        Ok(done.rows_affected() > 0)
    }

    /// Remove every record the application owns
    ///
    /// # Errors
    ///
    /// Returns an error if any delete fails
    pub async fn clear_all(&self) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        for key in storage_keys::ALL {
            sqlx::query("DELETE FROM kv_store WHERE key = ?1")
                .bind(key)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to remove '{key}': {e}")))?;
        }
        tx.commit().await?;
        debug!("Cleared all stored records");
        Ok(())
    }

    /// Keys currently present, in key order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn keys(&self) -> AppResult<Vec<String>> {
        let rows = sqlx::query("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list keys: {e}")))?;
        Ok(rows.iter().map(|row| row.get("key")).collect())
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
