// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides access to account, profile, plan, progress, and settings commands

pub mod account;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod settings;
