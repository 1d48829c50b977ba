//! CLI module for FocusUp
//!
//! Subcommands:
//! - `register`: create an account in the local user store
//! - `find`: look up an account by email
//! - `users`: list accounts in registration order
//! - `navigate`: run sidebar navigation requests through the session guard

pub mod navigate;
pub mod users;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// FocusUp - local account store and focus-session navigation
#[derive(Parser)]
#[command(name = "focusup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a new account
    Register(users::RegisterArgs),

    /// Find an account by email
    Find(users::FindArgs),

    /// List registered accounts
    Users,

    /// Simulate sidebar navigation
    Navigate(navigate::NavigateArgs),
}

/// Load `.env` and configuration, then install logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);
    config
}
