// ABOUTME: Application state container: reducer state plus the context that drives it
// ABOUTME: Re-exports AppState, Action, reduce, and AppContext
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application state container
//!
//! - [`AppState`] and [`reduce`]: pure state transitions
//! - [`AppContext`]: owns the state, the store, and the plan generator, and
//!   turns user operations into store calls plus [`Action`]s

pub mod app_context;
pub mod state;

pub use app_context::{AppContext, GenerationReport};
pub use state::{reduce, Action, AppState};
