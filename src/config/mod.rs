// ABOUTME: Configuration management module
// ABOUTME: Environment-driven application settings and re-exported calculator configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration comes from environment variables only; there is no config
//! file. Calculator coefficients live in `nutriplan_intelligence::config` and
//! are re-exported here.

/// Environment and storage configuration
pub mod environment;

pub use environment::{AppConfig, DatabaseUrl};
pub use nutriplan_intelligence::config::{IntelligenceConfig, NutritionConfig};
