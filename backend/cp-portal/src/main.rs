//! cp-portal - citizen portal operator CLI
//!
//! Runs the session gate for an identity against the profile database and
//! exposes the admin role screens. Every command prints a JSON report.
//!
//! # Examples
//!
//! ```bash
//! # Load the user home for a new identity (creates its profile)
//! cp-portal check --uid 42 --email juan@example.com --pretty
//!
//! # Promote and load the admin dashboard
//! cp-portal set-role --uid 42 --role admin
//! cp-portal check --uid 42 --role admin
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use cp_auth::ProtectOptions;
use cp_core::AccountType;
use cp_portal::{Portal, logger};

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::info;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let portal = match start().await {
        Ok(portal) => portal,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Check { visit } => match ProtectOptions::parse(visit.role.as_deref()) {
            Ok(options) => to_json(
                portal.check(visit.identity(), options.expected_role).await,
                cli.pretty,
            ),
            Err(e) => Err(e.into()),
        },
        Commands::Logout { visit } => match ProtectOptions::parse(visit.role.as_deref()) {
            Ok(options) => to_json(
                portal.logout(visit.identity(), options.expected_role).await,
                cli.pretty,
            ),
            Err(e) => Err(e.into()),
        },
        Commands::SetRole { uid, role } => match AccountType::from_str(&role) {
            Ok(account_type) => to_json(portal.set_role(&uid, account_type).await, cli.pretty),
            Err(e) => Err(e.into()),
        },
        Commands::List { role } => match AccountType::from_str(&role) {
            Ok(account_type) => to_json(portal.list(account_type).await, cli.pretty),
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load config, install the logger and open the database.
async fn start() -> cp_portal::Result<Portal> {
    // Load .env file if present (CP_* overrides)
    let _ = dotenvy::dotenv();

    let config = cp_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting cp-portal v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    Portal::open(config).await
}

fn to_json<T: Serialize>(
    report: cp_portal::Result<T>,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let report = report?;
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}
