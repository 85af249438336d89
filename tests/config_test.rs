// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Covers data directory, database URL, and bcrypt cost variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use nutriplan::config::environment::{BCRYPT_COST_ENV, DATABASE_URL_ENV, DATA_DIR_ENV};
use nutriplan::config::{AppConfig, DatabaseUrl};
use nutriplan::context::AppContext;
use nutriplan_core::errors::ErrorCode;
use serial_test::serial;
use tempfile::TempDir;

const DATA_DIR: &str = "/tmp/nutriplan-config-test";

fn clear_env() {
    env::remove_var(DATA_DIR_ENV);
    env::remove_var(DATABASE_URL_ENV);
    env::remove_var(BCRYPT_COST_ENV);
}

#[test]
#[serial]
fn test_database_defaults_to_file_in_data_dir() -> Result<()> {
    clear_env();
    let dir = TempDir::new()?;
    env::set_var(DATA_DIR_ENV, dir.path());

    let config = AppConfig::from_env()?;

    assert_eq!(config.data_dir, dir.path());
    assert_eq!(
        config.database,
        DatabaseUrl::SQLite {
            path: dir.path().join("nutriplan.db")
        }
    );
    assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    clear_env();
    Ok(())
}

#[test]
#[serial]
fn test_database_url_overrides_data_dir() -> Result<()> {
    clear_env();
    env::set_var(DATA_DIR_ENV, DATA_DIR);
    env::set_var(DATABASE_URL_ENV, "sqlite::memory:");

    let config = AppConfig::from_env()?;

    assert!(config.database.is_memory());
    assert_eq!(config.data_dir, PathBuf::from(DATA_DIR));
    clear_env();
    Ok(())
}

#[test]
#[serial]
fn test_bcrypt_cost_bounds() {
    clear_env();
    env::set_var(DATA_DIR_ENV, DATA_DIR);
    env::set_var(DATABASE_URL_ENV, "sqlite::memory:");

    env::set_var(BCRYPT_COST_ENV, "6");
    assert_eq!(AppConfig::from_env().unwrap().bcrypt_cost, 6);

    for bad in ["3", "32", "cheap"] {
        env::set_var(BCRYPT_COST_ENV, bad);
        let error = AppConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigError, "{bad}");
    }
    clear_env();
}

#[test]
#[serial]
fn test_unsupported_database_url() {
    clear_env();
    env::set_var(DATA_DIR_ENV, DATA_DIR);
    env::set_var(DATABASE_URL_ENV, "mysql://localhost/app");

    let error = AppConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    clear_env();
}

#[test]
fn test_database_url_parsing() {
    assert_eq!(
        DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
        DatabaseUrl::Memory
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:///var/lib/app.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("/var/lib/app.db")
        }
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:data/app.db")
            .unwrap()
            .to_string(),
        "sqlite:data/app.db"
    );
    assert!(DatabaseUrl::parse_url("sqlite:").is_err());
}

#[tokio::test]
async fn test_context_from_config_opens_file_store() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let config = AppConfig::new(
        dir.path().to_path_buf(),
        DatabaseUrl::for_file(&dir.path().join("store").join("nutriplan.db")),
        common::TEST_BCRYPT_COST,
    );

    let mut context = AppContext::from_config(&config).await?;
    assert!(!context.check_auth_status().await?);
    assert!(dir.path().join("store").join("nutriplan.db").exists());
    Ok(())
}
