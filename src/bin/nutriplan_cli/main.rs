// ABOUTME: Nutriplan CLI - command-line front end for the local health planner
// ABOUTME: Account, profile, plan, progress, and settings commands over the local store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create the device account; registering signs you in
//! nutriplan-cli account register --username alex --password secret1 --confirm-password secret1
//!
//! # Fill in the health profile
//! nutriplan-cli profile set \
//!     --age 30 --gender male --weight 70 --height 175 \
//!     --diet non-vegetarian --goal maintain --activity moderate
//!
//! # Generate and view plans
//! nutriplan-cli plan generate
//! nutriplan-cli plan show diet --html > diet.html
//!
//! # Track adherence
//! nutriplan-cli progress mark --status followed
//! nutriplan-cli progress month
//!
//! # Quick BMI check, no account needed
//! nutriplan-cli bmi --weight 70 --height 175
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use nutriplan::config::{AppConfig, DatabaseUrl};
use nutriplan::context::AppContext;
use nutriplan::logging::LoggingConfig;
use nutriplan::progress::parse_day;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{
    DietaryPreference, ExerciseLevel, Gender, HealthGoal, MedicalCondition, ProgressStatus,
    UserProfile,
};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutriplan health planner CLI",
    long_about = "Keep a health profile, generate diet and exercise plans, and track how well you follow them. All data stays on this device."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (sqlite:<path> or sqlite::memory:)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Account management
    Account {
        #[command(subcommand)]
        action: AccountCommand,
    },

    /// Health profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Diet and exercise plans
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Daily plan adherence
    Progress {
        #[command(subcommand)]
        action: ProgressCommand,
    },

    /// Preferences
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Compute BMI from weight and height
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AccountCommand {
    /// Register the device account
    Register {
        /// Username (at least 3 characters)
        #[arg(long)]
        username: String,

        /// Password (at least 6 characters)
        #[arg(long)]
        password: String,

        /// Password confirmation, must match
        #[arg(long)]
        confirm_password: String,
    },

    /// Check credentials against the device account
    Login {
        /// Username
        #[arg(long)]
        username: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Delete every stored record from this device
    Delete {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Create or replace the health profile
    Set {
        /// Age in years (13-120)
        #[arg(long)]
        age: u32,

        /// Gender
        #[arg(long)]
        gender: Gender,

        /// Weight in kilograms (20-300)
        #[arg(long)]
        weight: f64,

        /// Height in centimeters (100-250)
        #[arg(long)]
        height: f64,

        /// Dietary preference (vegan, vegetarian, non-vegetarian)
        #[arg(long)]
        diet: DietaryPreference,

        /// Health goal (`weight_loss`, `weight_gain`, `muscle_gain`, maintain, `general_health`)
        #[arg(long)]
        goal: HealthGoal,

        /// Exercise level (sedentary, light, moderate, heavy, `very_heavy`)
        #[arg(long)]
        activity: ExerciseLevel,

        /// Medical condition code
        #[arg(long, default_value = "none")]
        condition: MedicalCondition,

        /// Display name (defaults to the account username)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the profile and the computed daily needs
    Show,
}

/// Which stored plan to show
#[derive(Clone, Copy, ValueEnum)]
pub enum PlanChoice {
    /// Diet plan
    Diet,
    /// Exercise plan
    Exercise,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Generate both plans from the current profile
    Generate,

    /// Show a stored plan
    Show {
        /// Plan to show
        #[arg(value_enum)]
        plan: PlanChoice,

        /// Print the plan as a standalone HTML document
        #[arg(long)]
        html: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgressCommand {
    /// Record how the plan went on a day
    Mark {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,

        /// followed, partially-followed, or not-followed
        #[arg(long)]
        status: ProgressStatus,
    },

    /// Forget the status of a day
    Clear {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
    },

    /// Summarize a calendar month
    Month {
        /// Year, defaults to the current year
        #[arg(long)]
        year: Option<i32>,

        /// Month (1-12), defaults to the current month
        #[arg(long)]
        month: Option<u32>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SettingsCommand {
    /// Show or change reminder preferences
    Notifications {
        /// Master switch
        #[arg(long)]
        enabled: Option<bool>,

        /// Meal reminders
        #[arg(long)]
        meal: Option<bool>,

        /// Workout reminders
        #[arg(long)]
        exercise: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug")
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Command::Bmi { weight, height } = cli.command {
        return commands::profile::bmi(weight, height);
    }

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config = config.with_database(DatabaseUrl::parse_url(url)?);
    }
    debug!(database = %config.database, "Opening local store");

    let mut context = AppContext::from_config(&config).await?;
    context.check_auth_status().await?;

    match cli.command {
        Command::Account { action } => match action {
            AccountCommand::Register {
                username,
                password,
                confirm_password,
            } => {
                commands::account::register(&mut context, username, password, confirm_password)
                    .await?;
            }
            AccountCommand::Login { username, password } => {
                commands::account::login(&mut context, &username, &password).await?;
            }
            AccountCommand::Logout => commands::account::logout(&mut context).await?,
            AccountCommand::Delete { yes } => {
                commands::account::delete(&mut context, yes).await?;
            }
        },
        Command::Profile { action } => match action {
            ProfileCommand::Set {
                age,
                gender,
                weight,
                height,
                diet,
                goal,
                activity,
                condition,
                name,
            } => {
                let profile = UserProfile {
                    username: name,
                    age,
                    gender,
                    weight_kg: weight,
                    height_cm: height,
                    dietary_preference: diet,
                    health_goal: goal,
                    exercise_level: activity,
                    medical_condition: condition,
                };
                commands::profile::set(&mut context, profile).await?;
            }
            ProfileCommand::Show => commands::profile::show(&context)?,
        },
        Command::Plan { action } => match action {
            PlanCommand::Generate => commands::plan::generate(&mut context).await?,
            PlanCommand::Show { plan, html } => commands::plan::show(&context, plan, html)?,
        },
        Command::Progress { action } => match action {
            ProgressCommand::Mark { date, status } => {
                commands::progress::mark(&context, date, status).await?;
            }
            ProgressCommand::Clear { date } => commands::progress::clear(&context, date).await?,
            ProgressCommand::Month { year, month } => {
                commands::progress::month(&context, year, month).await?;
            }
        },
        Command::Settings { action } => match action {
            SettingsCommand::Notifications {
                enabled,
                meal,
                exercise,
            } => {
                commands::settings::notifications(&mut context, enabled, meal, exercise).await?;
            }
        },
        Command::Bmi { .. } => {}
    }

    Ok(())
}
