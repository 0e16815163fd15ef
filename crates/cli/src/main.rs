//! Solea CLI - Data seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create default data files (products.json, orders.json, settings.json)
//! solea-cli seed
//!
//! # Seed into a specific directory, overwriting existing files
//! solea-cli seed --data-dir /srv/solea/data --force
//!
//! # Reset the admin password
//! solea-cli admin set-password --password 'new-password'
//! ```
//!
//! # Commands
//!
//! - `seed` - Create the JSON data files the server expects
//! - `admin set-password` - Update the admin password in the settings store

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "solea-cli")]
#[command(author, version, about = "Solea CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the JSON data files the server expects
    Seed {
        /// Directory to write the data files into
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },
    /// Manage the admin account
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Update the admin password in the settings store
    SetPassword {
        /// Directory holding the data files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// The new password
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, force } => commands::seed::run(&data_dir, force).await?,
        Commands::Admin { action } => match action {
            AdminAction::SetPassword { data_dir, password } => {
                commands::admin::set_password(&data_dir, &password).await?;
            }
        },
    }
    Ok(())
}
