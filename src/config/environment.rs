// ABOUTME: Environment configuration for the local data store and password hashing
// ABOUTME: Parses data directory, database URL, and bcrypt cost from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use nutriplan_core::constants::service_names;
use nutriplan_core::errors::{AppError, AppResult};
use tracing::{info, warn};

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "NUTRIPLAN_DATA_DIR";
/// Environment variable naming the database URL
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Environment variable holding the bcrypt cost
pub const BCRYPT_COST_ENV: &str = "NUTRIPLAN_BCRYPT_COST";

/// Lowest bcrypt cost accepted by the bcrypt crate
const MIN_BCRYPT_COST: u32 = 4;
/// Highest bcrypt cost accepted by the bcrypt crate
const MAX_BCRYPT_COST: u32 = 31;

/// Database file name inside the data directory
const DATABASE_FILE_NAME: &str = "nutriplan.db";

/// Where the key-value store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory database, discarded on exit
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not use the `sqlite:` scheme or names no path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let Some(path_str) = s.strip_prefix("sqlite:") else {
            return Err(AppError::config(format!(
                "Unsupported database URL '{s}': only sqlite: URLs are supported"
            )));
        };
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        match path_str {
            ":memory:" => Ok(Self::Memory),
            "" => Err(AppError::config("Database URL names no file")),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// URL for a database file
    #[must_use]
    pub fn for_file(path: &Path) -> Self {
        Self::SQLite {
            path: path.to_path_buf(),
        }
    }

    /// Connection string understood by sqlx
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// True for the in-memory variant
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the local data
    pub data_dir: PathBuf,
    /// Key-value store location
    pub database: DatabaseUrl,
    /// bcrypt work factor for password hashes
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value or no data
    /// directory can be determined
    pub fn from_env() -> AppResult<Self> {
        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        let database = match env::var(DATABASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => DatabaseUrl::parse_url(url.trim())?,
            _ => DatabaseUrl::for_file(&data_dir.join(DATABASE_FILE_NAME)),
        };

        let bcrypt_cost = match env::var(BCRYPT_COST_ENV) {
            Ok(raw) => parse_bcrypt_cost(&raw)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        let config = Self {
            data_dir,
            database,
            bcrypt_cost,
        };
        config.log_summary();
        Ok(config)
    }

    /// Configuration with explicit values, used by tests and embedders
    #[must_use]
    pub fn new(data_dir: PathBuf, database: DatabaseUrl, bcrypt_cost: u32) -> Self {
        Self {
            data_dir,
            database,
            bcrypt_cost,
        }
    }

    /// Replace the database location
    #[must_use]
    pub fn with_database(mut self, database: DatabaseUrl) -> Self {
        self.database = database;
        self
    }

    fn log_summary(&self) {
        info!(
            service.name = service_names::NUTRIPLAN,
            data_dir = %self.data_dir.display(),
            database = %self.database,
            bcrypt_cost = self.bcrypt_cost,
            "Configuration loaded"
        );
        if self.database.is_memory() {
            warn!("In-memory database configured: nothing will be persisted");
        }
    }
}

fn default_data_dir() -> AppResult<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(service_names::NUTRIPLAN))
        .ok_or_else(|| {
            AppError::config(format!(
                "Could not determine a data directory; set {DATA_DIR_ENV}"
            ))
        })
}

fn parse_bcrypt_cost(raw: &str) -> AppResult<u32> {
    let cost: u32 = raw.trim().parse().map_err(|_| {
        AppError::config(format!("{BCRYPT_COST_ENV} must be an integer, got '{raw}'"))
    })?;
    if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        Ok(cost)
    } else {
        Err(AppError::config(format!(
            "{BCRYPT_COST_ENV} must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {cost}"
        )))
    }
}
