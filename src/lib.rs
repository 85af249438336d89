// ABOUTME: Main library entry point for the nutriplan health planner
// ABOUTME: Local profile storage, session state, templated diet and exercise plans, progress tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! A local, single-device health planner. It keeps a health profile, computes
//! BMR, TDEE, macro split and BMI, renders templated diet and exercise plans,
//! and tracks day-by-day plan adherence. All data lives in a local SQLite
//! key-value store.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven paths and hashing cost
//! - **Database**: key-value store with typed accessors per record
//! - **Auth**: single-account registration and login
//! - **Plans**: plan generator interface and the template generator
//! - **Context**: reducer state plus the context that drives it
//! - **Progress**: per-day adherence tracking
//!
//! Calculations live in `nutriplan-intelligence`; errors, constants and
//! models in `nutriplan-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::context::AppContext;
//! use nutriplan::database::Database;
//! use nutriplan_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let database = Database::new("sqlite::memory:").await?;
//!     let mut context = AppContext::new(database, bcrypt::DEFAULT_COST);
//!     let signed_in = context.check_auth_status().await?;
//!     println!("signed in: {signed_in}");
//!     Ok(())
//! }
//! ```

/// Single-account registration and login
pub mod auth;

/// Environment configuration
pub mod config;

/// Application state container
pub mod context;

/// Local key-value store
pub mod database;

/// Structured logging setup
pub mod logging;

/// Diet and exercise plan generation
pub mod plans;

/// Daily plan adherence tracking
pub mod progress;

pub use nutriplan_core::errors::{AppError, AppResult, ErrorCode};
