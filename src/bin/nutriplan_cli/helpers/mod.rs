// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for nutriplan-cli
// ABOUTME: Provides session handling and display formatting utilities

pub mod display;
pub mod session;
