//! Topup Store CLI - store file management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the store file and seed the default catalog
//! topup --store store.json seed
//!
//! # Wipe everything and restore the seed data
//! topup --store store.json reset
//!
//! # Inspect a collection
//! topup --store store.json list products
//!
//! # Replace the admin credentials
//! topup --store store.json admin set-credentials -u owner -p s3cret
//! ```
//!
//! # Commands
//!
//! - `seed` - Create the store file and seed the default catalog
//! - `reset` - Wipe the store and restore the seed data
//! - `list` - Print a collection or singleton as JSON
//! - `admin set-credentials` - Replace the admin credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::list::Collection;

#[derive(Parser)]
#[command(name = "topup")]
#[command(author, version, about = "Topup Store CLI tools")]
struct Cli {
    /// Path to the store file (falls back to `TOPUP_STORE_PATH`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store file and seed the default catalog
    Seed,
    /// Wipe the store and restore the seed data
    Reset {
        /// Keep the admin session alive across the reset
        #[arg(long)]
        keep_admin_session: bool,
    },
    /// Print a collection or singleton as JSON
    List {
        /// Which collection to print
        collection: Collection,
    },
    /// Manage admin credentials
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Replace the admin username and password
    SetCredentials {
        /// New admin username
        #[arg(short, long)]
        username: String,

        /// New admin password
        #[arg(short, long)]
        password: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = commands::store_path(cli.store)?;
    match cli.command {
        Commands::Seed => commands::seed::run(&path)?,
        Commands::Reset { keep_admin_session } => commands::reset::run(&path, keep_admin_session)?,
        Commands::List { collection } => commands::list::run(&path, collection)?,
        Commands::Admin { action } => match action {
            AdminAction::SetCredentials { username, password } => {
                commands::admin::set_credentials(&path, &username, &password)?;
            }
        },
    }
    Ok(())
}
